use dioxus::prelude::*;

use crate::constants::APP_NAME;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let columns = [
        (
            t!("footer-explore"),
            [t!("footer-new-arrivals"), t!("footer-top-rated"), t!("footer-blog")],
        ),
        (
            t!("footer-company"),
            [t!("footer-about-us"), t!("footer-careers"), t!("footer-press")],
        ),
        (
            t!("footer-help"),
            [t!("footer-faq"), t!("footer-contact-us"), t!("footer-privacy-policy")],
        ),
    ];

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "site-footer__grid",
                    div { class: "site-footer__brand",
                        h4 { class: "site-footer__logo", "{APP_NAME}" }
                        p { class: "site-footer__tagline", {t!("footer-tagline")} }
                    }
                    for (heading, links) in columns {
                        div { key: "{heading}", class: "site-footer__column",
                            h5 { class: "site-footer__heading", "{heading}" }
                            ul { class: "site-footer__links",
                                for link in links {
                                    li { key: "{link}",
                                        a { class: "site-footer__link", href: "#", "{link}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "site-footer__legal",
                    p { {t!("footer-copyright", app = APP_NAME)} }
                }
            }
        }
    }
}
