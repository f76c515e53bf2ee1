use leptos::prelude::*;

/// Страницы портала в боковом меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalPage {
    #[default]
    PaymentApproval,
    CreatePayment,
    QuickEntry,
    Recipients,
    Templates,
    Users,
}

impl PortalPage {
    pub fn all() -> [PortalPage; 6] {
        [
            PortalPage::PaymentApproval,
            PortalPage::CreatePayment,
            PortalPage::QuickEntry,
            PortalPage::Recipients,
            PortalPage::Templates,
            PortalPage::Users,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortalPage::PaymentApproval => "Payment Approval",
            PortalPage::CreatePayment => "Create Payment",
            PortalPage::QuickEntry => "ACH Quick Entry",
            PortalPage::Recipients => "Recipients",
            PortalPage::Templates => "Templates",
            PortalPage::Users => "User Management",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PortalPage::PaymentApproval => "approval",
            PortalPage::CreatePayment => "plus",
            PortalPage::QuickEntry => "edit",
            PortalPage::Recipients => "recipients",
            PortalPage::Templates => "templates",
            PortalPage::Users => "settings",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PortalPage>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PortalPage::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, page: PortalPage) {
        log::debug!("open page {:?}", page);
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_have_distinct_labels() {
        let labels: std::collections::HashSet<&str> =
            PortalPage::all().iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), PortalPage::all().len());
        assert_eq!(PortalPage::default(), PortalPage::PaymentApproval);
    }
}
