use leptos::*;

const SUBTITLE: &str = "Hey, I'm Victor! Welcome to my";
const TITLE: &str = "portfolio";
const SMALL_SCREEN_NOTICE: &str = "This Portfolio is designed for desktop/tablet screens only.";

/// Splits `text` into one glyph per character, swapping spaces for non-breaking spaces so
/// per-character spans keep the word gaps.
pub(super) fn glyphs(text: &str) -> Vec<String> {
    text.chars()
        .map(|ch| if ch == ' ' { '\u{00A0}' } else { ch })
        .map(String::from)
        .collect()
}

fn render_glyphs(text: &str, class: &'static str, weight: u16) -> View {
    let style = format!("font-variation-settings:\"wght\" {weight};");
    glyphs(text)
        .into_iter()
        .map(|glyph| {
            view! { <span class=class style=style.clone()>{glyph}</span> }
        })
        .collect_view()
}

#[component]
pub(super) fn Welcome() -> impl IntoView {
    view! {
        <section id="welcome">
            <p>{render_glyphs(SUBTITLE, "text-3xl font-georama", 100)}</p>
            <h1 class="mt-7">{render_glyphs(TITLE, "text-9xl italic font-georama", 400)}</h1>
            <div class="small-screen">
                <p>{SMALL_SCREEN_NOTICE}</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glyphs_keep_word_gaps_as_non_breaking_spaces() {
        assert_eq!(glyphs("a b"), vec!["a", "\u{00A0}", "b"]);
        assert_eq!(glyphs(TITLE).concat(), TITLE);
        assert_eq!(glyphs(SUBTITLE).len(), SUBTITLE.chars().count());
        assert!(!glyphs(SUBTITLE).iter().any(|glyph| glyph == " "));
    }
}
