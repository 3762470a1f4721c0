use leptos::prelude::*;

/// Colour of a badge, mapped to `badge--*` modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl Tone {
    /// Green for a set flag, red otherwise.
    pub fn flag(on: bool) -> Self {
        if on {
            Tone::Success
        } else {
            Tone::Error
        }
    }

    fn class(self) -> &'static str {
        match self {
            Tone::Primary => "badge badge--primary",
            Tone::Success => "badge badge--success",
            Tone::Warning => "badge badge--warning",
            Tone::Error => "badge badge--error",
            Tone::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: Tone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

/// Two-state badge for boolean record flags (featured, active, visible...)
#[component]
pub fn FlagBadge(
    #[prop(into)] on: Signal<bool>,
    on_label: &'static str,
    off_label: &'static str,
) -> impl IntoView {
    view! {
        <span class=move || Tone::flag(on.get()).class()>
            {move || if on.get() { on_label } else { off_label }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_tone() {
        assert_eq!(Tone::flag(true), Tone::Success);
        assert_eq!(Tone::flag(false).class(), "badge badge--error");
        assert_eq!(Tone::default().class(), "badge badge--neutral");
    }
}
