//! System prompts and prompt builders for the three generation agents.

pub const PLANNER_SYSTEM_PROMPT: &str = "\
You are an expert UX architect and website planner.
Your role is to analyze user requirements and create a detailed plan for a React + TypeScript website.

Output a structured plan including:
1. Overall layout structure
2. Section breakdown (Hero, Features, etc.)
3. Component hierarchy
4. UX strategy and user flow
5. Design recommendations

Be specific and actionable. Focus on premium, modern web design patterns.";

pub const COPYWRITER_SYSTEM_PROMPT: &str = "\
You are an expert copywriter and marketing specialist.
Your role is to create compelling, conversion-focused copy for websites.

Generate:
1. Powerful headlines and subheadlines
2. Engaging hero section copy
3. Feature descriptions that sell benefits
4. Clear, action-oriented CTA button text
5. Microcopy for various sections

Write in a premium, professional tone. Focus on clarity and conversion.";

pub const CODE_SYSTEM_PROMPT: &str = "\
You are an expert React + TypeScript developer.
Your role is to generate clean, production-ready React components.

Requirements:
- Use React functional components with TypeScript
- Use proper TypeScript interfaces and types
- Include inline styles or CSS modules
- Follow best practices (hooks, props, composition)
- Generate complete, runnable components
- Use modern React patterns

Output only the code, properly formatted and ready to use.";

pub fn planner_prompt(user_prompt: &str) -> String {
    format!(
        "Create a detailed website plan for the following request:\n\n\
         {user_prompt}\n\n\
         Provide a comprehensive plan covering layout, sections, components, and UX strategy."
    )
}

pub fn copywriter_prompt(user_prompt: &str) -> String {
    format!(
        "Create premium marketing copy for the following website:\n\n\
         {user_prompt}\n\n\
         Provide:\n\
         - Hero headline and subheadline\n\
         - Feature section titles and descriptions\n\
         - CTA button text\n\
         - Any other relevant microcopy\n\n\
         Make it compelling and conversion-focused."
    )
}

/// Code agent prompt; plan and copy are appended as context when the other
/// agents produced them.
pub fn code_prompt(user_prompt: &str, plan: &str, copy: &str) -> String {
    let mut context = format!("Generate React + TypeScript components for:\n\n{user_prompt}");

    if !plan.is_empty() {
        context.push_str(&format!("\n\nArchitecture Plan:\n{plan}"));
    }
    if !copy.is_empty() {
        context.push_str(&format!("\n\nMarketing Copy:\n{copy}"));
    }

    context.push_str(
        "\n\nGenerate complete React TSX components including:\n\
         1. Main App.tsx\n\
         2. Individual section components (Hero, Features, etc.)\n\
         3. Proper TypeScript interfaces\n\
         4. Inline styles or CSS\n\n\
         Provide clean, production-ready code.",
    );

    context
}
