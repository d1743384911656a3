/// Creates the URLs a visitor follows to sign in at (or sign out from)
/// the identity provider.
///
/// Both URLs lead the visitor back to `dest_url` afterwards.
pub trait IdentityGateway {
    fn create_login_url(&self, dest_url: &str) -> String;
    fn create_logout_url(&self, dest_url: &str) -> String;
}
