pub mod about;
pub mod contact;
pub mod copyright;
pub mod cta;
pub mod final_cta;
pub mod hero;
pub mod kind;
pub mod logo;
pub mod property;
pub mod property_page;
pub mod property_section;
pub mod services;
pub mod site;
pub mod social;
pub mod testimonials;
pub mod why;
