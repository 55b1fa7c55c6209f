use std::fmt::Write;

use colored::Colorize;
use concord_sdk::{Classification, MeasurementModel, ReconciliationReport};

const RULE_WIDTH: usize = 70;

/// Render a reconciliation report as the sectioned console summary.
pub fn report_text(report: &ReconciliationReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, r: &ReconciliationReport) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "{}", "Epistemic Merge & Concordance".bold())?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    writeln!(out, "{}", "Measurements".bold())?;
    write_measurement(out, &r.first)?;
    write_measurement(out, &r.second)?;

    writeln!(out, "{}", "Initial Tension".bold())?;
    writeln!(out, "  Gap: {:.2} km/s/Mpc", r.initial_gap)?;
    writeln!(out, "  Significance: {:.2}σ", r.initial_tension)?;
    writeln!(out)?;

    writeln!(out, "{}", "Epistemic Merge".bold())?;
    writeln!(
        out,
        "  Merged Result: H₀ = {:.2} ± {:.2} km/s/Mpc",
        r.merged.h0_merged, r.merged.u_merged
    )?;
    writeln!(out, "  Epistemic Distance: Δ_T = {:.4}", r.merged.delta_t)?;
    writeln!(
        out,
        "  Inflation: ×{:.2} over naive ± {:.3}",
        r.merged.inflation, r.merged.naive_sigma
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "Concordance Analysis".bold())?;
    writeln!(
        out,
        "  Offset from {}: {:.2} km/s/Mpc",
        r.reference.name(),
        r.concordance.offset_km_s_mpc
    )?;
    writeln!(out, "  Significance: {:.2}σ", r.concordance.significance_sigma)?;
    match r.reduction_pct {
        Some(pct) => writeln!(out, "  Tension Reduction: {pct:.1}%")?,
        None => writeln!(out, "  Tension Reduction: n/a (inputs already agree)")?,
    }
    writeln!(out)?;

    writeln!(out, "{}", "Summary".bold())?;
    match r.reduction_pct {
        Some(pct) => writeln!(out, "  Achieved {pct:.1}% concordance")?,
        None => writeln!(out, "  Achieved concordance: n/a")?,
    }
    writeln!(out, "  Residual tension: {:.2}σ", r.concordance.significance_sigma)?;
    writeln!(out, "  Epistemic distance: Δ_T = {:.4}", r.merged.delta_t)?;
    writeln!(out)?;

    writeln!(out, "{rule}")?;
    writeln!(out, "{}", verdict(r).bold())?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn write_measurement(out: &mut String, m: &MeasurementModel) -> std::fmt::Result {
    writeln!(
        out,
        "  {}: {:.2} ± {:.2} km/s/Mpc",
        m.name().cyan(),
        m.value(),
        m.sigma()
    )?;
    writeln!(out, "    z = {}", m.redshift())?;
    writeln!(out, "    Method: {}", m.method())?;
    writeln!(out)
}

fn verdict(r: &ReconciliationReport) -> String {
    let cfg = &r.config.concordance;
    match r.classification {
        Classification::Concordant => format!(
            "{} Result: CONCORDANCE ACHIEVED (< {}σ)",
            "✓".green(),
            cfg.concordant_below
        ),
        Classification::MildTension => format!(
            "{} Result: MILD TENSION ({}-{}σ)",
            "!".yellow(),
            cfg.concordant_below,
            cfg.significant_at
        ),
        Classification::SignificantTension => format!(
            "{} Result: SIGNIFICANT TENSION (≥ {}σ)",
            "✗".red(),
            cfg.significant_at
        ),
    }
}
