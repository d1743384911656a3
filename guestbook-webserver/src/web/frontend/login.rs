use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    FromForm,
};

use super::{super::guards::*, view};
use crate::web::identity::{local_redirect_target, CONTINUE_PARAM};
use guestbook_core::entities::{Caller, EmailAddress};

#[derive(FromForm)]
pub struct Continue<'r> {
    #[field(name = "continue")]
    url: Option<&'r str>,
}

#[derive(FromForm)]
pub struct LoginForm<'r> {
    email: &'r str,
    nickname: Option<&'r str>,
    #[field(name = "continue")]
    continue_url: Option<&'r str>,
}

fn login_page_url(target: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(CONTINUE_PARAM, target)
        .finish();
    format!("/login?{query}")
}

#[allow(clippy::result_large_err)]
#[get("/login?<target..>")]
pub fn get_login(
    auth: Auth,
    flash: Option<FlashMessage>,
    target: Continue<'_>,
) -> std::result::Result<Markup, Redirect> {
    let target = local_redirect_target(target.url);
    if auth.caller().is_some() {
        Err(Redirect::to(target.to_owned()))
    } else {
        Ok(view::login(flash, target))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    credentials: Form<LoginForm<'_>>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let LoginForm {
        email,
        nickname,
        continue_url,
    } = credentials.into_inner();
    let target = local_redirect_target(continue_url);
    let Ok(email) = email.parse::<EmailAddress>() else {
        return Err(Flash::error(
            Redirect::to(login_page_url(target)),
            "Invalid e-mail address.",
        ));
    };
    let caller = Caller::from_email(email, nickname.map(ToOwned::to_owned));
    let value = match caller_cookie_value(&caller) {
        Ok(value) => value,
        Err(err) => {
            error!("Failed to encode session cookie: {err}");
            return Err(Flash::error(
                Redirect::to(login_page_url(target)),
                "We are so sorry! An internal server error has occurred. Please try again later.",
            ));
        }
    };
    cookies.add_private(
        Cookie::build((COOKIE_CALLER_KEY, value))
            .http_only(true)
            .same_site(SameSite::Lax),
    );
    info!("{} signed in", caller.email);
    Ok(Redirect::to(target.to_owned()))
}

#[get("/logout?<target..>")]
pub fn get_logout(cookies: &CookieJar<'_>, target: Continue<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_CALLER_KEY);
    Flash::success(
        Redirect::to(local_redirect_target(target.url).to_owned()),
        "You have been signed out.",
    )
}
