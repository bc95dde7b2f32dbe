pub mod graphs;
pub mod routing;
pub mod search;
pub mod utility;
