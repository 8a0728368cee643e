//! Homepage markup
//!
//! The root `.homepage-component` wraps an intro presence container, the
//! search form, the informational blocks and the results panel.

use maud::{Markup, html};

use crate::core::{HomepageRender, IntroRender, LEAVE_CLASS, ResultsRender, SearchFormRender};
use crate::web::views::enterprise_card;
use crate::web::views::layout::SITE_TITLE;

/// The homepage root element
pub fn homepage(render: &HomepageRender) -> Markup {
    html! {
        div.homepage-component { (homepage_contents(render)) }
    }
}

/// Children of `.homepage-component`, also sent on live re-renders
pub fn homepage_contents(render: &HomepageRender) -> Markup {
    html! {
        div.intro-presence {
            @if let Some(intro) = render.intro {
                (intro_block(intro))
            }
        }

        (search_form(&render.search_form))

        @if render.show_info_blocks {
            p.powered-by {
                "Powered by " a href="http://cised.ca" { "CSED" } ". If you are a social" br;
                "enterprise that would like to be added click " a href="/apply" { "here" } "."
            }

            p.chat {
                a href="mailto:team@cised.ca" { "Click here to chat with CSED" }
                " about buying questions or to get more information"
            }

            p.rhok {
                "This site is a project created at "
                a href="https://rhok.ca/projects/ottawa-social-enterprise-marketplace" { "Random Hacks of Kindness" }
            }
        }

        @if let Some(results) = &render.results {
            (search_results(results))
        }
    }
}

fn intro_class(intro: IntroRender) -> String {
    if intro.leaving {
        format!("intro js-intro {LEAVE_CLASS}")
    } else {
        "intro js-intro".to_string()
    }
}

fn intro_block(intro: IntroRender) -> Markup {
    html! {
        div class=(intro_class(intro)) {
            h1.title { (SITE_TITLE) }
            p.tagline {
                "Find goods and services from Ottawa's vibrant social enterprise sector."
            }
        }
    }
}

fn search_form(form: &SearchFormRender) -> Markup {
    html! {
        form.search-form action="/" method="get" role="search" {
            label.search-form__label for="search-text" { "Search the directory" }
            input #search-text.search-form__input type="search" name="q"
                value=(form.search_text) placeholder="Catering, bicycles, printing…";
            button.search-form__submit type="submit" { "Search" }
        }
    }
}

fn search_results(results: &ResultsRender) -> Markup {
    let count = results.hits.len();
    let summary = match count {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    };

    html! {
        section.search-results
            data-search-text=(results.search_text)
            data-direct-search=(if results.direct_search { "true" } else { "false" })
            data-api-root=(results.api_root)
        {
            p.search-results__summary {
                (summary)
                @if !results.search_text.is_empty() {
                    " for “" (results.search_text) "”"
                }
            }

            @if count == 0 {
                p.search-results__empty { "No enterprises matched your search." }
            } @else {
                div.section.group {
                    @for enterprise in &results.hits {
                        (enterprise_card(enterprise))
                    }
                }
            }
        }
    }
}
