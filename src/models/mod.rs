//! Data models for the UNLSH admin content client.
//!
//! These models match the content API wire format exactly for seamless
//! interoperability with the site frontend.

mod collections;
mod event;
mod faq;
mod highlight;
mod slide;
mod testimonial;
mod value_card;

pub use collections::*;
pub use event::*;
pub use faq::*;
pub use highlight::*;
pub use slide::*;
pub use testimonial::*;
pub use value_card::*;
