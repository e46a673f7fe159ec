//! Beauty roadmap builder.
//!
//! Turns selected priorities and optional notes into an educational summary.
//! Only the header is personalized; the "Now", "Maintenance" and
//! "Long-term care" sections are the same for everyone and never vary
//! clinical-sounding advice per visitor.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BeautyPriority {
    pub id: &'static str,
    pub label: &'static str,
}

pub static BEAUTY_PRIORITIES: &[BeautyPriority] = &[
    BeautyPriority { id: "smooth-lines", label: "Softer expression lines" },
    BeautyPriority { id: "restore-volume", label: "Restored volume and contour" },
    BeautyPriority { id: "skin-texture", label: "Smoother skin texture" },
    BeautyPriority { id: "even-tone", label: "More even skin tone" },
    BeautyPriority { id: "acne-scars", label: "Less visible acne scarring" },
    BeautyPriority { id: "glow", label: "Hydration and glow" },
    BeautyPriority { id: "prevention", label: "Prevention and healthy aging" },
    BeautyPriority { id: "body-wellness", label: "Body and wellness goals" },
];

const NOW_SECTION: &str = "Now:\n\
- Bring this roadmap to a consultation and talk through what matters most to you.\n\
- Ask what each option can and cannot change, and what downtime looks like.\n\
- Start daily sunscreen and a gentle, consistent skincare routine.";

const MAINTENANCE_SECTION: &str = "Maintenance:\n\
- Most aesthetic results need upkeep; ask how often touch-ups are typical.\n\
- Keep notes and photos so you can see gradual change.\n\
- Check in with your provider before adding new products or treatments.";

const LONG_TERM_SECTION: &str = "Long-term care:\n\
- Sleep, hydration, nutrition and sun protection support every result.\n\
- Revisit your priorities once or twice a year as your goals change.\n\
- Any plan should come from an in-person assessment with a licensed provider.";

const FOOTER: &str = "This roadmap is educational and is not a treatment plan.";

pub fn priority_label(id: &str) -> Option<&'static str> {
    BEAUTY_PRIORITIES.iter().find(|p| p.id == id).map(|p| p.label)
}

/// Compose the roadmap text. Unknown priority ids are shown as given.
pub fn build_beauty_roadmap<S: AsRef<str>>(priorities: &[S], notes: Option<&str>) -> String {
    let mut labels: Vec<&str> = Vec::new();
    for id in priorities {
        let id = id.as_ref().trim();
        if id.is_empty() {
            continue;
        }
        let label = priority_label(id).unwrap_or(id);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    let focus = if labels.is_empty() {
        "not selected yet".to_string()
    } else {
        labels.join(", ")
    };

    let mut out = String::from("Your beauty roadmap\n");
    out.push_str(&format!("Focus areas: {focus}\n"));
    if let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) {
        out.push_str(&format!("Your notes: {notes}\n"));
    }
    out.push('\n');
    out.push_str(NOW_SECTION);
    out.push_str("\n\n");
    out.push_str(MAINTENANCE_SECTION);
    out.push_str("\n\n");
    out.push_str(LONG_TERM_SECTION);
    out.push_str("\n\n");
    out.push_str(FOOTER);
    out
}
