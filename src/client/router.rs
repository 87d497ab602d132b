use dioxus::prelude::*;

use crate::client::app::AppShell;
use crate::client::components::layout::{
    AdminLayout, AuthLayout, DashboardLayout, StorefrontLayout,
};
use crate::client::routes::admin::{AddEvent, AdminHome, EditEvent, ManageEvents, ManageUsers};
use crate::client::routes::auth::{SignIn, SignUp};
use crate::client::routes::dashboard::{BookedEvents, Profile};
use crate::client::routes::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]

        #[layout(StorefrontLayout)]

        #[route("/")]
        Home {},

        #[nest("/dashboard")]

            #[layout(DashboardLayout)]

            #[route("/:username")]
            Profile { username: String },

            #[route("/:username/booked-events")]
            BookedEvents { username: String },

            #[end_layout]

        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },

        #[end_layout]

        #[nest("/auth")]

            #[layout(AuthLayout)]

            #[route("/signin")]
            SignIn {},

            #[route("/signup")]
            SignUp {},

            #[end_layout]

        #[end_nest]

        #[nest("/admin")]

            #[layout(AdminLayout)]

            #[route("/")]
            AdminHome {},

            #[route("/users")]
            ManageUsers {},

            #[route("/addevent")]
            AddEvent {},

            #[route("/manageevents")]
            ManageEvents {},

            #[route("/manageevents/:id")]
            EditEvent { id: i64 },
}
