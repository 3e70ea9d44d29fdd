//! Prompt templates for draft and analysis requests.

use crate::domain::worksheet::QuadrantRecord;

/// Build the prompt asking for a four-quadrant draft as a JSON object.
pub fn draft_prompt(theme: &str) -> String {
    format!(
        r#"The user's dilemma: "{theme}"

Write a first draft of a decisional-balance worksheet (a structured list of pros and cons) for this dilemma.
Describe concrete, plausible content for each of the four items below.

Respond with a JSON object of exactly this shape, every value a string:
{{
  "keepPros": "Benefits of not changing (advantages of the status quo)",
  "keepCons": "Costs of not changing (drawbacks of the status quo)",
  "changeCons": "Costs of changing (fears and costs of change)",
  "changePros": "Benefits of changing (advantages and hopes of change)"
}}"#
    )
}

/// Build the prompt asking for a Markdown reflection on a finished worksheet.
pub fn analysis_prompt(theme: &str, record: &QuadrantRecord) -> String {
    format!(
        r#"You are an expert in cognitive behavioral therapy (CBT).
The user has completed a decisional-balance worksheet about an inner conflict.
Analyze it and give feedback that either gently encourages them or offers an objective insight.

## The user's theme
{theme}

## Worksheet
1. Benefits of not changing (advantages of the status quo): {keep_pros}
2. Costs of not changing (drawbacks of the status quo): {keep_cons}
3. Costs of changing (fears and costs of change): {change_cons}
4. Benefits of changing (advantages and hopes of change): {change_pros}

## Instructions
- Begin by affirming that the user faced this conflict at all.
- From the four perspectives, identify the values the user truly cares about and the core of what they fear.
- Finish by proposing one small behavioral experiment: a low-risk first step that is fine to fail.
- Keep the tone warm and accepting while staying logically organized.
- Format the answer as Markdown."#,
        keep_pros = record.keep_pros,
        keep_cons = record.keep_cons,
        change_cons = record.change_cons,
        change_pros = record.change_pros,
    )
}
