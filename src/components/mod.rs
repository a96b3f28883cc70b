mod navbar;
mod route_gate;
pub mod shell;

pub use navbar::Navbar;
pub use route_gate::RouteGate;
