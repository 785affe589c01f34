use leptos::*;

use super::WindowHost;
use crate::model::WindowKey;

struct SocialLink {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
    class: &'static str,
}

const SOCIALS: [SocialLink; 4] = [
    SocialLink {
        label: "Github",
        icon: "/icons/github.svg",
        href: "https://github.com",
        class: "bg-[#f4656b]",
    },
    SocialLink {
        label: "Platform",
        icon: "/icons/atom.svg",
        href: "https://example.com",
        class: "bg-[#4bcb63]",
    },
    SocialLink {
        label: "Twitter/X",
        icon: "/icons/twitter.svg",
        href: "https://x.com",
        class: "bg-[#ff866b]",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "/icons/linkedin.svg",
        href: "https://www.linkedin.com",
        class: "bg-[#05b6f6]",
    },
];

#[component]
pub(super) fn ContactWindow() -> impl IntoView {
    view! {
        <WindowHost target=WindowKey::Contact title="Contact Me">
            <div class="contact">
                <img src="/images/profile.png" alt="Profile" class="w-20 rounded-full" />
                <h3>"Let's Connect"</h3>
                <p>"Got an idea? A bug to squash? Or just wanna talk tech? I'm in."</p>
                <ul>
                    {SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <li class=social.class>
                                    <a href=social.href target="_blank" rel="noopener noreferrer">
                                        <img src=social.icon alt=social.label class="size-5" />
                                        <p>{social.label}</p>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </WindowHost>
    }
}
