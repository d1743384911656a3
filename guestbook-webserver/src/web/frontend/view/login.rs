use super::page::*;
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn login(flash: Option<FlashMessage>, continue_url: &str) -> Markup {
    page(
        "Sign in",
        flash,
        None,
        html! {
          form class="login" action="/login" method="POST" {
              fieldset{
                label {
                    "eMail:"
                    br;
                    input type="email" name="email" placeholder="eMail address" required;
                }
                br;
                label{
                    "Nickname (optional):"
                    br;
                    input type="text" name="nickname" placeholder="Nickname";
                }
                input type="hidden" name="continue" value=(continue_url);
                br;
                input type="submit" value="sign in";
                a href=(continue_url) { "cancel" }
              }
          }
        },
    )
}
