//! A single enterprise in the results grid

use maud::{Markup, html};
use shared::Enterprise;

pub fn enterprise_card(enterprise: &Enterprise) -> Markup {
    let logo_alt = enterprise.logo_alt();

    html! {
        div.search-result.col.span_1_of_2 {
            div.enterprise {
                div.enterprise__logo {
                    img src=(enterprise.logo_src()) alt=(logo_alt) title=(logo_alt);
                }
                h2.enterprise__title { (enterprise.title) }
                div.enterprise__description { (enterprise.description) }
                div.enterprise__website {
                    a href=(enterprise.website) { "Website" }
                }
            }
        }
    }
}
