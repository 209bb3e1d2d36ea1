// ABOUTME: Prompt construction for LLM-based swim zone classification
// ABOUTME: Builds the system instructions and the per-session user message

use std::fmt::Write as _;

use super::{TimeSlot, ZoneDetectionRequest, ZoneId};

/// Output schema the model must follow, verbatim
const OUTPUT_SCHEMA: &str = r#"{"zones":{"z1":number,"z2":number,"z3":number,"z4":number,"z5":number},"confidence":number,"reasoning":string,"suggestions":[string]}"#;

/// System prompt describing the zones and the expected JSON output
#[must_use]
pub fn zone_system_prompt() -> String {
    let mut prompt = String::from(
        "You are an expert swimming coach. You read a swim training session written \
         in free text (French or English, often abbreviated like \"8x100 @1'45\") and \
         estimate how the session volume is distributed across five intensity zones.\n\nZones:\n",
    );

    for zone in ZoneId::ALL {
        let _ = writeln!(prompt, "- {} ({}): {}", zone, zone.label(), zone.description());
    }

    prompt.push_str(
        "\nRules:\n\
         - Express each zone as a percentage of total distance; the five values sum to 100.\n\
         - Warm-up and cool-down count as z1 unless stated otherwise.\n\
         - confidence is between 0 and 1 and drops when the description is vague.\n\
         - reasoning is one or two sentences in French.\n\
         - suggestions holds at most three short coaching tips in French; use [] if none.\n\
         - Answer with a single JSON object and nothing else, using exactly this shape:\n",
    );
    prompt.push_str(OUTPUT_SCHEMA);
    prompt
}

/// User message for one session
#[must_use]
pub fn zone_user_prompt(request: &ZoneDetectionRequest) -> String {
    let mut prompt = format!("Session:\n{}\n", request.content.trim());

    if let Some(objective) = &request.objective {
        let _ = write!(prompt, "\nObjective: {objective}\n");
    }

    if let Some(time_slot) = request.time_slot {
        let moment = match time_slot {
            TimeSlot::Am => "morning",
            TimeSlot::Pm => "afternoon/evening",
        };
        let _ = write!(prompt, "\nTime slot: {} ({moment})\n", time_slot.as_str());
    }

    prompt
}
