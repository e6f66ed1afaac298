use std::io::{BufRead, Write};

use hepa_scorer::service::PredictionService;

use crate::form::Form;

/// Run the form until the user stops or input ends.
///
/// Prediction failures are shown inline and the session carries on.
pub fn run<R: BufRead, W: Write>(
    form: &mut Form<R, W>,
    service: &PredictionService,
    show_features: bool,
) -> eyre::Result<()> {
    writeln!(form.output(), "Liver Disease Outcome Prediction")?;
    writeln!(
        form.output(),
        "Press Enter to accept a default. Log policy: {}",
        service.pipeline().log_policy()
    )?;

    loop {
        writeln!(form.output())?;
        let Some(raw) = form.prompt_record()? else {
            break;
        };

        if form.confirm("Predict Outcome?", true)? {
            if show_features && let Ok(vector) = service.features(&raw) {
                for (name, value) in vector.iter() {
                    writeln!(form.output(), "  {name:<28} {value}")?;
                }
            }

            match service.predict(&raw) {
                Ok(result) => writeln!(form.output(), "Predicted Outcome: {}", result.outcome)?,
                Err(e) => writeln!(form.output(), "Error: {e}")?,
            }
        }

        if !form.confirm("Predict another patient?", false)? {
            break;
        }
    }

    Ok(())
}
