// Shared prompt fragments. Each agent keeps its own prompts in agents/prompts.rs;
// this file holds the instruction and market framing pieces they append.

/// Appended to every prompt whose reply is decoded as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON.";

/// Stricter variant closing the gap analysis prompt, right under its schema.
pub const JSON_ONLY_NO_MARKDOWN: &str =
    "Return ONLY valid JSON. No markdown, no explanation outside JSON.";

/// Market framing for the gap analysis recruiter persona.
pub const INDIA_MARKET_CONTEXT: &str = "India's top product companies and GCCs \
    (Global Capability Centres) in Gurugram, Bangalore, and remote";

/// Single-pass `{name}` substitution.
///
/// Values are inserted verbatim and never rescanned, so a resume that happens to
/// contain `{jd_block}` stays untouched. Unknown placeholders and the literal
/// braces of JSON schemas are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
