use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{CustomType, Select, Text, validator::Validation};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let mut q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help);

        q = q.with_validator(move |x: &f64| {
            if !x.is_finite() {
                return Ok(Validation::Invalid("Must be a finite number".into()));
            }
            match (min, max) {
                (Some(lo), Some(hi)) if *x < lo || *x > hi => Ok(Validation::Invalid(
                    format!("Must be between {lo} and {hi}").into(),
                )),
                (Some(lo), None) if *x < lo => {
                    Ok(Validation::Invalid(format!("Must be ≥ {lo}").into()))
                }
                (None, Some(hi)) if *x > hi => {
                    Ok(Validation::Invalid(format!("Must be ≤ {hi}").into()))
                }
                _ => Ok(Validation::Valid),
            }
        });

        Ok(q.prompt()?)
    }

    fn ask_select(&self, title: &str, help: &str, options: Vec<String>) -> Result<usize> {
        let picked = Select::new(title, options)
            .with_help_message(help)
            .raw_prompt()?;
        Ok(picked.index)
    }
}
