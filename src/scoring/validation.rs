use super::thresholds::{LengthThresholds, Thresholds};

/// Validate threshold configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_thresholds(thresholds: &Thresholds) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_length("thresholds.title", &thresholds.title, &mut errors);
    validate_length("thresholds.description", &thresholds.description, &mut errors);

    let kw = &thresholds.keywords;
    if kw.min > kw.optimal {
        errors.push(format!(
            "thresholds.keywords.min: {} must not exceed optimal ({})",
            kw.min, kw.optimal
        ));
    }
    if kw.optimal > kw.max {
        errors.push(format!(
            "thresholds.keywords.optimal: {} must not exceed max ({})",
            kw.optimal, kw.max
        ));
    }

    let density = &thresholds.keyphrase_density;
    if !density.min.is_finite() || density.min < 0.0 {
        errors.push("thresholds.keyphrase_density.min: must be a non-negative number".to_string());
    }
    if !density.max.is_finite() || density.max > 100.0 {
        errors.push("thresholds.keyphrase_density.max: must be at most 100".to_string());
    }
    if density.min > density.max {
        errors.push(format!(
            "thresholds.keyphrase_density.min: {} must not exceed max ({})",
            density.min, density.max
        ));
    }

    let content = &thresholds.content_length;
    if content.min == 0 {
        errors.push("thresholds.content_length.min: must be positive".to_string());
    }
    if content.min >= content.optimal {
        errors.push(format!(
            "thresholds.content_length.optimal: {} must be greater than min ({})",
            content.optimal, content.min
        ));
    }

    if thresholds.internal_links.min == 0 {
        errors.push("thresholds.internal_links.min: must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_length(path: &str, t: &LengthThresholds, errors: &mut Vec<String>) {
    if t.min == 0 {
        errors.push(format!("{}.min: must be positive", path));
    }
    if t.min > t.max {
        errors.push(format!("{}.min: {} must not exceed max ({})", path, t.min, t.max));
    }
    if t.optimal < t.min || t.optimal > t.max {
        errors.push(format!(
            "{}.optimal: {} must lie between min ({}) and max ({})",
            path, t.optimal, t.min, t.max
        ));
    }
}
