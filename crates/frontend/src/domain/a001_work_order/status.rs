use thaw::BadgeColor;

/// Badge color for a digital production status.
pub fn digital_status_color(status: &str) -> BadgeColor {
    match status {
        "Internally Approved" => BadgeColor::Success,
        "Submitted" => BadgeColor::Informative,
        _ => BadgeColor::Subtle,
    }
}

/// Badge color for a physical production status. Approval and blueprint
/// states come in several variants ("Quality Approved", "Insufficient
/// Blueprints", ...) and are matched by substring.
pub fn physical_status_color(status: &str) -> BadgeColor {
    if status.contains("Approved") {
        BadgeColor::Success
    } else if status.contains("Blueprints") {
        BadgeColor::Warning
    } else if status == "Started" {
        BadgeColor::Informative
    } else {
        BadgeColor::Subtle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digital_statuses_map_to_expected_colors() {
        assert!(matches!(
            digital_status_color("Internally Approved"),
            BadgeColor::Success
        ));
        assert!(matches!(
            digital_status_color("Submitted"),
            BadgeColor::Informative
        ));
        assert!(matches!(digital_status_color("Assigned"), BadgeColor::Subtle));
    }

    #[test]
    fn physical_statuses_map_by_substring() {
        assert!(matches!(
            physical_status_color("Quality Approved"),
            BadgeColor::Success
        ));
        assert!(matches!(
            physical_status_color("Insufficient Blueprints"),
            BadgeColor::Warning
        ));
        assert!(matches!(
            physical_status_color("Sufficient Blueprints"),
            BadgeColor::Warning
        ));
        assert!(matches!(
            physical_status_color("Started"),
            BadgeColor::Informative
        ));
        assert!(matches!(
            physical_status_color("On Hold"),
            BadgeColor::Subtle
        ));
    }
}
