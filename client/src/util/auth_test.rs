use super::*;
use crate::state::session::{Identity, Principal};

fn admin() -> SessionState {
    SessionState::resolved(
        Principal::Admin(Identity { uid: "a1".to_owned(), email: "a@b.com".to_owned() }),
        Some("t".to_owned()),
    )
}

#[test]
fn no_redirect_while_pending() {
    assert_eq!(view_redirect(&SessionState::pending(), NavigationTarget::AdminDashboard), None);
}

#[test]
fn signed_out_dashboard_request_goes_home() {
    assert_eq!(view_redirect(&SessionState::signed_out(), NavigationTarget::UserDashboard), Some("/"));
}

#[test]
fn signed_out_login_request_stays() {
    assert_eq!(view_redirect(&SessionState::signed_out(), NavigationTarget::AdminLogin), None);
}

#[test]
fn admin_on_login_page_moves_to_admin_dashboard() {
    assert_eq!(view_redirect(&admin(), NavigationTarget::UserLogin), Some("/admin"));
    assert_eq!(view_redirect(&admin(), NavigationTarget::AdminDashboard), None);
}
