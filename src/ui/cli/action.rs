use strum_macros::{EnumIter, EnumMessage, IntoStaticStr};

/// Entries of the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, IntoStaticStr)]
pub enum Action {
    #[strum(
        message = "Upload dataset",
        detailed_message = "Validate a sensor CSV and keep it for training."
    )]
    Upload,

    #[strum(
        message = "Train model",
        detailed_message = "Fit a classifier on an uploaded dataset and make it active."
    )]
    Train,

    #[strum(
        message = "Predict downtime",
        detailed_message = "Score one Temperature / Run_Time reading."
    )]
    Predict,

    #[strum(message = "Status", detailed_message = "Show the active model and feature columns.")]
    Status,

    #[strum(message = "Quit")]
    Quit,
}
