use serde::{Deserialize, Serialize};

/// Периодичность платежа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    #[default]
    #[serde(rename = "One-Time")]
    OneTime,
    Weekly,
    #[serde(rename = "Bi-Weekly")]
    BiWeekly,
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    /// Периодичности повторяющегося платежа
    pub fn recurring() -> [Frequency; 5] {
        [
            Frequency::Weekly,
            Frequency::BiWeekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Annually,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        std::iter::once(Frequency::OneTime)
            .chain(Self::recurring())
            .find(|f| f.display_name() == name)
    }

    pub fn is_recurring(&self) -> bool {
        *self != Frequency::OneTime
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One-Time",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        }
    }
}
