use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::uri::Origin,
    post,
    request::FlashMessage,
    response::{content::RawCss, Redirect},
    routes, FromForm, Route, State,
};
use url::form_urlencoded;

use crate::web::{guards::*, sqlite, Error};
use guestbook_core::usecases;

mod login;
mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, Error>;

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        post_section,
        get_main_css,
        login::get_login,
        login::post_login,
        login::get_logout,
    ]
}

#[get("/?<section_name>")]
pub fn get_index(
    db: sqlite::Connections,
    auth: Auth,
    identity: &State<Identity>,
    origin: &Origin<'_>,
    flash: Option<FlashMessage>,
    section_name: Option<&str>,
) -> Result<Markup> {
    let current_url = origin.to_string();
    let section = {
        let db = db.shared()?;
        usecases::view_section(
            &db,
            &**identity.inner(),
            auth.caller(),
            section_name,
            &current_url,
        )?
    };
    Ok(view::section(flash, &section))
}

#[derive(FromForm)]
pub struct CommentForm<'r> {
    section_name: Option<&'r str>,
    content: Option<&'r str>,
}

#[post("/section?<section_name>", data = "<comment>")]
pub fn post_section(
    db: sqlite::Connections,
    auth: Auth,
    section_name: Option<&str>,
    comment: Form<CommentForm<'_>>,
) -> Result<Redirect> {
    let CommentForm {
        section_name: form_section_name,
        content,
    } = comment.into_inner();
    let request = usecases::NewCommentRequest {
        section_name: form_section_name.or(section_name),
        content,
    };
    let (section_name, _) = {
        let db = db.exclusive()?;
        usecases::post_comment(&db, auth.caller(), request)?
    };
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("section_name", section_name.as_str())
        .finish();
    Ok(Redirect::to(format!("/?{query}")))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}
