//! Display implementations for domain models.
//!
//! Steps are rendered as markdown blocks with status icons; short values such
//! as statuses and adjusted times render inline.

use std::fmt;

use crate::{
    models::{
        AdjustedTime, BilingualText, CurrentStep, Language, RoutePhase, StepStatus, StepView,
    },
    progress::RoutePosition,
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BilingualText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.en)
    }
}

impl fmt::Display for AdjustedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        if let Some(label) = self.delta_label() {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}

impl fmt::Display for RoutePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for RoutePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "km {:.0} on route", self.route_km)?;
        if self.off_route_km >= 0.5 {
            write!(f, ", {:.1} km off the road", self.off_route_km)?;
        }
        Ok(())
    }
}

/// Writes one step as a markdown block. `time` replaces the planned window
/// when the cascade moved it.
pub(crate) fn fmt_step(
    f: &mut fmt::Formatter<'_>,
    view: &StepView,
    time: Option<&AdjustedTime>,
    language: Language,
) -> fmt::Result {
    let def = view.definition;
    let record = &view.record;

    writeln!(
        f,
        "### {} ({})",
        def.title.get(language),
        record.status.with_icon()
    )?;
    writeln!(f)?;

    match time {
        Some(adjusted) if adjusted.shifted => {
            writeln!(f, "- **When**: {adjusted} · planned {}", def.time_window)?
        }
        _ => writeln!(f, "- **When**: {}", def.time_window)?,
    }
    let subtitle = def.subtitle.get(language);
    if !subtitle.is_empty() {
        writeln!(f, "- **Where**: {subtitle}")?;
    }
    if !def.carry.is_empty() {
        let carry: Vec<&str> = def.carry.iter().map(|item| item.get(language)).collect();
        writeln!(f, "- **Carry**: {}", carry.join(", "))?;
    }
    if let Some(reason) = &record.skip_reason {
        writeln!(f, "- **Skipped because**: {reason}")?;
    }
    if !record.status.is_finished() {
        if let Some(consequence) = def.skip_consequence.filter(|_| def.skip_allowed) {
            writeln!(f, "- **If skipped**: {}", consequence.get(language))?;
        }
    }
    writeln!(f)?;

    let tip = def.tip.get(language);
    if !tip.is_empty() && !record.status.is_finished() {
        writeln!(f, "> {tip}")?;
        writeln!(f)?;
    }

    Ok(())
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_step(f, self, None, Language::En)
    }
}

impl fmt::Display for CurrentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(step) = &self.step else {
            writeln!(f, "# All done")?;
            writeln!(f)?;
            return writeln!(f, "Every step is finished or skipped. Safe journey home.");
        };

        writeln!(f, "# Now")?;
        writeln!(f)?;
        write!(f, "{step}")?;

        match &self.next_step {
            Some(next) => writeln!(
                f,
                "**Next**: {} at {}",
                next.definition.title, next.definition.time_window
            ),
            None => writeln!(f, "**Next**: nothing, this is the last step"),
        }
    }
}
