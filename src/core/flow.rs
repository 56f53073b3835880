use crate::core::wizard::{Directive, View, Wizard};
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::form::Form;
use crate::models::step::Step;
use crate::session::SessionStore;
use log::{debug, info};

/// Runs one request through the wizard against a session store: read the
/// record, transition, write back only what a successful step produced.
pub struct FlowLogic;

impl FlowLogic {
    pub fn submit<S: SessionStore + ?Sized>(
        store: &mut S,
        wizard: &Wizard,
        step: Step,
        form: &Form,
    ) -> AppResult<Directive> {
        // Entry must work even if the old session cannot be decoded anymore.
        let booking = if step == Step::Entry {
            Booking::default()
        } else {
            Booking::load(store)?
        };

        let directive = wizard.submit(step, form, &booking);

        match &directive {
            Directive::Advance { next, record } => {
                if step == Step::Entry {
                    record.replace_in(store)?;
                } else {
                    record.persist(store)?;
                }
                info!("{} -> {}", step, next);
            }
            Directive::Terminate { record } => {
                record.persist(store)?;
                info!("{} -> done", step);
            }
            Directive::Stay { reason, .. } => {
                debug!("{} rejected: {:?}", step, reason);
            }
            Directive::Redirect { step: to, reason } => {
                debug!("{} redirected to {}: {:?}", step, to, reason);
            }
        }

        Ok(directive)
    }

    /// Visit a step without input. Never writes to the store.
    pub fn view<S: SessionStore + ?Sized>(store: &S, wizard: &Wizard, step: Step) -> AppResult<View> {
        let booking = Booking::load(store)?;
        Ok(wizard.view(step, &booking))
    }
}
