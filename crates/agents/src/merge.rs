//! Merges the three agent outputs into one `GenerationResponse`.

use once_cell::sync::Lazy;
use regex::Regex;
use sitegen_shared::GenerationResponse;

const MAX_IMPROVEMENTS: usize = 5;

static IMPROVEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?im)recommends?:?\s*(.+?)(?:\n|$)",
        r"(?im)suggests?:?\s*(.+?)(?:\n|$)",
        r"(?im)consider:?\s*(.+?)(?:\n|$)",
        r"(?im)improvement:?\s*(.+?)(?:\n|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("improvement pattern is valid"))
    .collect()
});

pub fn merge_outputs(plan: String, copy: String, code: String) -> GenerationResponse {
    let improvements = extract_improvements(&plan);
    let final_code = enhance_code_with_copy(&code, &copy);
    let summary = generate_summary(&code);

    GenerationResponse {
        plan,
        copywriting: copy,
        code,
        final_code,
        improvements,
        summary,
    }
}

/// Pulls recommendation-style lines out of the plan; falls back to a stock
/// list when the plan contains none.
pub fn extract_improvements(plan: &str) -> Vec<String> {
    let mut improvements: Vec<String> = Vec::new();

    for pattern in IMPROVEMENT_PATTERNS.iter() {
        for capture in pattern.captures_iter(plan) {
            if let Some(m) = capture.get(1) {
                let text = m.as_str().trim();
                if !text.is_empty() {
                    improvements.push(text.to_string());
                }
            }
        }
    }

    if improvements.is_empty() {
        improvements = vec![
            "Add smooth scroll animations".to_string(),
            "Implement responsive design breakpoints".to_string(),
            "Include accessibility features (ARIA labels)".to_string(),
            "Add loading states for better UX".to_string(),
        ];
    }

    improvements.truncate(MAX_IMPROVEMENTS);
    improvements
}

/// Annotates the generated code with the copywriter output so the caller
/// has everything in one artifact.
fn enhance_code_with_copy(code: &str, copy: &str) -> String {
    format!(
        "// Generated by the sitegen multi-agent pipeline\n\
         // This code incorporates insights from:\n\
         // - Planner agent (architecture)\n\
         // - Copywriter agent (marketing copy)\n\
         // - Code agent (implementation)\n\n\
         {code}\n\n\
         /*\n\
         MARKETING COPY TO USE:\n\
         {copy}\n\
         */\n"
    )
}

fn generate_summary(code: &str) -> String {
    // Rough component count for TSX output.
    let component_count = code.matches("const ").count() + code.matches("function ").count();

    format!(
        "Multi-agent generation complete.\n\n\
         Planner agent: created architecture and UX strategy\n\
         Copywriter agent: generated marketing copy\n\
         Code agent: built {component_count}+ React components\n\n\
         The final output includes:\n\
         - Complete React + TypeScript codebase\n\
         - Professional component structure\n\
         - Marketing copy integrated\n\
         - Extra improvements and recommendations\n"
    )
}
