// SPDX-License-Identifier: PMPL-1.0-or-later

//! A mounted page that re-renders whenever the session language toggles.

use super::{Page, RenderedPage};
use crate::error::LanguageError;
use crate::language::{use_language, LanguageService, Subscription};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

pub struct PageView {
    rendered: Rc<RefCell<RenderedPage>>,
    renders: Rc<Cell<usize>>,
    service: LanguageService,
    _subscription: Subscription,
}

impl PageView {
    /// Mount `page` under the innermost language scope.
    ///
    /// Renders once immediately, then again after every toggle until the
    /// view is dropped.
    pub fn mount(page: Page) -> Result<Self, LanguageError> {
        let service = use_language()?;
        let rendered = Rc::new(RefCell::new(page.render_with(&service)));
        let renders = Rc::new(Cell::new(1));

        let sink = Rc::clone(&rendered);
        let counter = Rc::clone(&renders);
        let reader = service.clone();
        let subscription = service.subscribe(move |lang| {
            tracing::debug!(%lang, "re-rendering page");
            *sink.borrow_mut() = page.render_with(&reader);
            counter.set(counter.get() + 1);
        });

        Ok(Self {
            rendered,
            renders,
            service,
            _subscription: subscription,
        })
    }

    /// The most recent render.
    pub fn current(&self) -> Ref<'_, RenderedPage> {
        self.rendered.borrow()
    }

    /// How many times the page has rendered, including the initial mount.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    pub fn service(&self) -> &LanguageService {
        &self.service
    }
}
