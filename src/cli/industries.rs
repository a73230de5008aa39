use console::style;
use crate::errors::AuditError;
use crate::models::industry::Industry;

pub async fn handle_industries(quiet: bool) -> Result<(), AuditError> {
    for industry in Industry::ALL {
        println!("{}", style(industry).cyan().bold());
        if !quiet {
            let ctx = industry.context();
            println!("  {}", ctx.savings_hook);
            println!("  {}", style(ctx.hero_stat).dim());
        }
    }
    Ok(())
}
