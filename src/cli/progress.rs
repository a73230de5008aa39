use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use console::style;
use crate::errors::AuditError;

/// Staged messages shown while a forecast is "prepared". Purely cosmetic.
pub const AUDIT_STEPS: [(&str, Duration); 3] = [
    ("Reconciling your maintenance and downtime baselines…", Duration::from_millis(350)),
    ("Applying Sensyva's proven reduction benchmarks…", Duration::from_millis(450)),
    ("Quantifying upside and packaging insights…", Duration::from_millis(400)),
];

pub struct AuditProgress {
    bar: ProgressBar,
}

impl AuditProgress {
    pub fn new() -> Result<Self, AuditError> {
        let bar = ProgressBar::new(AUDIT_STEPS.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} {bar:30.cyan/dark_gray} {percent:>3}% | {msg}")
                .map_err(|e| AuditError::Internal(format!("Progress template error: {}", e)))?
                .progress_chars("█▓░"),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        Ok(Self { bar })
    }

    /// Walk through every step, then clear the bar.
    pub async fn run(self) {
        for (message, pause) in AUDIT_STEPS {
            self.bar.set_message(message);
            self.bar.inc(1);
            tokio::time::sleep(pause).await;
        }
        self.bar.finish_and_clear();
        println!(
            "{} Analysis Complete: Your Sensyva AI Potential Report is Ready.",
            style("✓").green().bold()
        );
    }
}
