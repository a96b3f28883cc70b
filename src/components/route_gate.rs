use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{access, Access, Route};
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct RouteGateProps {
    pub route: Route,
    pub children: Children,
}

/// Renders its children only when the route's capability is met, otherwise
/// redirects without rendering them even once.
#[function_component(RouteGate)]
pub fn route_gate(props: &RouteGateProps) -> Html {
    let session = use_session();
    let authenticated = session.as_ref().is_some_and(|s| s.is_authenticated());

    match access(&props.route, authenticated) {
        Access::Granted => html! { { for props.children.iter() } },
        Access::Redirect(to) => {
            log::info!("{:?} needs a session, redirecting to {:?}", props.route, to);
            html! { <Redirect<Route> to={to} /> }
        }
    }
}
