//! Site content, compiled into the bundle.

use std::rc::Rc;

use dioxus::prelude::*;
use trailhead_core::{Content, ContentError, ContentSources};

const SOURCES: ContentSources<'static> = ContentSources {
    profile: include_str!("../../content/profile.json"),
    experience: include_str!("../../content/experience.json"),
    projects: include_str!("../../content/projects.json"),
    skills: include_str!("../../content/skills.json"),
    interests: include_str!("../../content/interests.json"),
    apps: include_str!("../../content/apps.json"),
};

pub fn load() -> Result<Content, ContentError> {
    Content::parse(SOURCES)
}

#[derive(Clone)]
pub struct SharedContent(pub Rc<Content>);

impl PartialEq for SharedContent {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn use_content() -> Rc<Content> {
    use_context::<Rc<Content>>()
}
