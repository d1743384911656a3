use maud::{html, Markup};
use rocket::request::FlashMessage;
use url::form_urlencoded;

use guestbook_core::{entities::*, usecases::SectionView};

mod login;
mod page;

pub use login::*;
use page::*;

const ANONYMOUS_AUTHOR: &str = "An anonymous person";

/// Escape a section name for embedding it into a query string.
pub fn escape_section_name(name: &SectionName) -> String {
    form_urlencoded::byte_serialize(name.as_str().as_bytes()).collect()
}

pub fn section(flash: Option<FlashMessage>, view: &SectionView) -> Markup {
    let SectionView {
        user,
        comments,
        section_name,
        url,
        url_action,
    } = view;
    let escaped_section_name = escape_section_name(section_name);
    page(
        &format!("Guestbook: {section_name}"),
        flash,
        None,
        html! {
            header {
                div class="msg" { "Hello, " span class="user" { (user) } }
                nav {
                    a class="account" href=(url) { (url_action.link_text()) }
                }
            }
            main {
                h1 { "Section " em { (section_name.as_str()) } }
                div class="comments" {
                    @if comments.is_empty() {
                        p class="empty" { "Nobody has written anything here yet." }
                    }
                    @for comment in comments {
                        (comment_entry(comment))
                    }
                }
                form class="new-comment" action=(format!("/section?section_name={escaped_section_name}")) method="POST" {
                    textarea name="content" rows="3" cols="60" {}
                    br;
                    input class="btn" type="submit" value="Post comment";
                }
                hr;
                form class="switch-section" action="/" method="GET" {
                    "Section: "
                    input type="text" name="section_name" value=(section_name.as_str());
                    input class="btn" type="submit" value="switch";
                }
            }
        },
    )
}

fn comment_entry(comment: &Comment) -> Markup {
    let author = comment
        .author
        .as_ref()
        .and_then(Author::display_name)
        .unwrap_or(ANONYMOUS_AUTHOR);
    html! {
        div class="comment" {
            p class="author" {
                b { (author) } " wrote:"
            }
            blockquote { (comment.content) }
            span class="date" { (comment.date.to_string()) }
        }
    }
}
