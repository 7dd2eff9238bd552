pub mod assets;
pub mod items;
pub mod properties;
pub mod sections;
pub mod site;
pub mod social;
