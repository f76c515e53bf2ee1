pub mod metadata;
pub mod mock_data;
