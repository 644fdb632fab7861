//! Configuration sections.
//!
//! | Section       | Type                    |
//! |---------------|-------------------------|
//! | `[site]`      | [`SiteMetadata`]        |
//! | `[locale]`    | [`Locale`]              |
//! | `[logo]`      | [`LogoDisplay`]         |
//! | `[[socials]]` | [`SocialLinkSource`]    |

mod locale;
mod logo;
mod site;
mod social;

pub use locale::{DEFAULT_LANGUAGE_CODE, Locale};
pub use logo::LogoDisplay;
pub use site::{DEFAULT_SCHEDULED_POST_MARGIN_MILLIS, EditPost, SiteMetadata};
pub use social::{
    SocialLinkEntry, SocialLinkSource, SocialPlatform, TITLE_PLACEHOLDER, render_link_title,
};
