use crate::impact::ImpactReport;
use crate::models::industry::Industry;
use crate::utils::formatting::{format_crores, format_hours};

pub fn format_headline_metrics(report: &ImpactReport) -> String {
    format!(
        "| Metric | Value |\n|---|---|\n| Potential Total Annual Savings | {} |\n| Maintenance Cost Reduction (up to {}%) | {} |\n| Downtime Risk Reduction (up to {}%) | {} |\n",
        format_crores(report.total_savings()),
        report.maintenance_reduction_percentage(),
        format_crores(report.maintenance_savings()),
        report.downtime_reduction_percentage(),
        format_crores(report.downtime_savings()),
    )
}

pub fn format_downtime_compression(report: &ImpactReport) -> String {
    format!(
        "**Downtime Loss Compression**\n\n| Scenario | Cost |\n|---|---|\n| Current Downtime Loss | {} |\n| Projected Loss with Sensyva | {} |\n",
        format_crores(report.downtime_cost()),
        format_crores(report.projected_downtime_loss()),
    )
}

pub fn format_narrative(report: &ImpactReport, industry: Industry) -> String {
    let context = industry.context();
    format!(
        "## Why This Gap Exists: The Sensyva Difference\n\n\
         ### The 95% Data Gap: A Hidden Cost in {industry}\n\n\
         Your current losses of **{total}** are tied to the **95% of industrial sensor data** \
         that never gets analyzed in time. This blind spot drives:\n\n\
         - **Late Detection:** Waiting for data to reach the cloud means failures are detected too late, \
         resulting in {hours} hours/year of hard downtime.\n\
         - **Incomplete Picture:** Traditional monitoring and {budget} in spend still miss cross-sensor context.\n\
         - **Industry Reality:** {hook}\n\n\
         ### Sensyva AI: The Path to Real-Time Intelligence\n\n\
         Sensyva's hardware-agnostic Edge AI framework fuses and scores sensor streams *in 10ms*, \
         so your teams act before faults cascade.\n\n\
         - **10 Millisecond Decisions:** We analyze vibration, thermal, acoustic, and power data together to surface actionable alerts.\n\
         - **Proven Reliability:** Clients routinely see maintenance savings of up to {pct}% and near-zero unplanned downtime.\n\n\
         > {stat}\n",
        industry = industry,
        total = format_crores(report.total_savings()),
        hours = format_hours(report.unplanned_downtime_hours()),
        budget = format_crores(report.annual_maintenance_budget()),
        hook = context.savings_hook,
        pct = report.maintenance_reduction_percentage(),
        stat = context.hero_stat,
    )
}

/// Full forecast as shown after a successful calculation.
pub fn render_forecast_markdown(report: &ImpactReport, industry: Industry) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Quantified Impact Forecast for {} Leaders\n\n", industry));
    out.push_str(&format!(
        "Based on Sensyva's edge deployments in {} environments, here's the risk you can pull back into revenue.\n\n",
        industry.as_str().to_lowercase()
    ));
    out.push_str(&format_headline_metrics(report));
    out.push('\n');
    out.push_str(&format_downtime_compression(report));
    out.push_str("\n---\n\n");
    out.push_str(&format_narrative(report, industry));
    out
}
