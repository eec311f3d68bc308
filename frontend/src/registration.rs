use std::cell::Cell;
use std::rc::Rc;

use log::{debug, error, info};
use shared::{AgeGroup, CreatePlayerRequest, SharedError};
use validator::Validate;
use yew::prelude::*;

use crate::store::ClubStore;

pub const SUCCESS_MESSAGE: &str = "Player registered successfully!";
pub const FAILURE_MESSAGE: &str = "Error registering player. Please try again.";

/// Registration form contents, exactly as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerDraft {
    pub name: String,
    pub age: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Age,
    ParentName,
    ParentEmail,
    ParentPhone,
}

impl PlayerDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Age => &self.age,
            DraftField::ParentName => &self.parent_name,
            DraftField::ParentEmail => &self.parent_email,
            DraftField::ParentPhone => &self.parent_phone,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Age => self.age = value,
            DraftField::ParentName => self.parent_name = value,
            DraftField::ParentEmail => self.parent_email = value,
            DraftField::ParentPhone => self.parent_phone = value,
        }
    }

    /// Build the API request, parsing age and applying the same checks the
    /// form inputs declare (required, 4 to 16, email-shaped)
    pub fn to_request(&self) -> shared::Result<CreatePlayerRequest> {
        let age = self.age.trim().parse::<i32>().map_err(|_| {
            SharedError::Validation(format!("Age must be a whole number, got '{}'", self.age))
        })?;

        let request = CreatePlayerRequest {
            name: self.name.clone(),
            age,
            parent_name: self.parent_name.clone(),
            parent_email: self.parent_email.clone(),
            parent_phone: self.parent_phone.clone(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Age group the API is expected to assign, once the age is in range
    pub fn age_group_hint(&self) -> Option<AgeGroup> {
        match self.age.trim().parse::<i32>() {
            Ok(age) if (4..=16).contains(&age) => Some(AgeGroup::for_age(age)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success,
    Failure,
}

impl FormMessage {
    pub fn text(&self) -> &'static str {
        match self {
            FormMessage::Success => SUCCESS_MESSAGE,
            FormMessage::Failure => FAILURE_MESSAGE,
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            FormMessage::Success => "bg-green-100 text-green-700",
            FormMessage::Failure => "bg-red-100 text-red-700",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub draft: PlayerDraft,
    pub submitting: bool,
    pub message: Option<FormMessage>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(DraftField, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

impl Reducible for RegistrationForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Edit(field, value) => {
                let mut draft = self.draft.clone();
                draft.set(field, value);
                Rc::new(Self {
                    draft,
                    ..(*self).clone()
                })
            }
            FormAction::SubmitStarted => Rc::new(Self {
                submitting: true,
                ..(*self).clone()
            }),
            FormAction::SubmitSucceeded => Rc::new(Self {
                draft: PlayerDraft::default(),
                submitting: false,
                message: Some(FormMessage::Success),
            }),
            // Keep what the user typed so they can retry
            FormAction::SubmitFailed => Rc::new(Self {
                submitting: false,
                message: Some(FormMessage::Failure),
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered,
    Failed,
    /// Another submit was still in flight
    Ignored,
}

/// Drives one registration: write, then a full refresh on success
#[derive(Clone)]
pub struct RegistrationController {
    store: ClubStore,
    in_flight: Rc<Cell<bool>>,
    dispatch: Callback<FormAction>,
}

impl PartialEq for RegistrationController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.in_flight, &other.in_flight)
    }
}

impl RegistrationController {
    pub fn new(store: ClubStore, dispatch: Callback<FormAction>) -> Self {
        Self {
            store,
            in_flight: Rc::new(Cell::new(false)),
            dispatch,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit(&self, draft: PlayerDraft) -> SubmitOutcome {
        if self.in_flight.replace(true) {
            debug!("Registration already in flight, ignoring submit");
            return SubmitOutcome::Ignored;
        }
        self.dispatch.emit(FormAction::SubmitStarted);

        let result = match draft.to_request() {
            Ok(request) => self
                .store
                .api()
                .create_player(&request)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        self.in_flight.set(false);

        match result {
            Ok(()) => {
                info!("Registered player {}", draft.name);
                self.dispatch.emit(FormAction::SubmitSucceeded);
                // Refresh failures are recorded by the store itself
                let _ = self.store.refresh_all().await;
                SubmitOutcome::Registered
            }
            Err(e) => {
                error!("Error registering player: {}", e);
                self.dispatch.emit(FormAction::SubmitFailed);
                SubmitOutcome::Failed
            }
        }
    }
}
