use super::{
    repository::ProductsRepository,
    schema::{CATEGORY_FIELD, IMAGE_FIELD, PRODUCER_FIELD, PRODUCT_FORM},
};
use crate::api::{ApiClient, SelectOption};
use crate::state::form::{
    dispatch, transition, FormAction, FormState, SubmitDecision, SubmitOutcome,
};
use crate::state::notification::{use_notifications, Notifications};
use crate::utils::{
    file::read_upload,
    task::{spawn_scoped, TaskSlot},
};
use leptos::*;
use std::rc::Rc;
use web_sys::File;

pub const PRODUCTS_ROUTE: &str = "/dashboard/products";
pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_DESCRIPTION: &str = "Product created successfully!";

pub type Navigate = Rc<dyn Fn(&str)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    Notify {
        title: &'static str,
        description: &'static str,
    },
    Navigate(&'static str),
}

/// What the page does after a submission settles, besides updating the form.
pub fn effects_for(outcome: SubmitOutcome) -> Vec<SubmitEffect> {
    match outcome {
        SubmitOutcome::Created => vec![
            SubmitEffect::Notify {
                title: SUCCESS_TITLE,
                description: SUCCESS_DESCRIPTION,
            },
            SubmitEffect::Navigate(PRODUCTS_ROUTE),
        ],
        SubmitOutcome::Rejected | SubmitOutcome::Failed => Vec::new(),
    }
}

#[derive(Clone, Copy)]
pub struct ProductsAddViewModel {
    pub form: RwSignal<FormState>,
    pub producers: RwSignal<Vec<SelectOption>>,
    pub categories: RwSignal<Vec<SelectOption>>,
    repository: StoredValue<ProductsRepository>,
    navigate: StoredValue<Navigate>,
    notifications: Notifications,
    submit_task: StoredValue<TaskSlot>,
    read_task: StoredValue<TaskSlot>,
}

impl ProductsAddViewModel {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ProductsRepository::new_with_client(Rc::new(api));
        let producers = create_rw_signal(Vec::new());
        let categories = create_rw_signal(Vec::new());

        let loader = repository.clone();
        spawn_scoped(async move {
            let options = loader.load_options().await;
            producers.set(options.producers);
            categories.set(options.categories);
        });

        let navigate: Navigate = Rc::new(navigate);
        Self {
            form: create_rw_signal(FormState::new(&PRODUCT_FORM)),
            producers,
            categories,
            repository: store_value(repository),
            navigate: store_value(navigate),
            notifications: use_notifications(),
            submit_task: store_value(TaskSlot::scoped()),
            read_task: store_value(TaskSlot::scoped()),
        }
    }

    pub fn options_for(&self, field: &str) -> Option<Signal<Vec<SelectOption>>> {
        match field {
            CATEGORY_FIELD => Some(self.categories.into()),
            PRODUCER_FIELD => Some(self.producers.into()),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(FormState::is_submitting))
    }

    /// Validates and, if the form is ready and idle, posts it.
    pub fn submit(&self) {
        let payload = match transition(self.form, FormState::begin_submit) {
            Some(SubmitDecision::Ready(payload)) => payload,
            Some(SubmitDecision::Invalid) => {
                log::debug!("product form has client-side errors");
                return;
            }
            Some(SubmitDecision::AlreadySubmitting) => {
                log::debug!("product submission already in flight");
                return;
            }
            None => return,
        };

        let vm = *self;
        let repository = self.repository.get_value();
        self.submit_task.with_value(|slot| {
            slot.replace(async move {
                let result = repository.create_product(payload).await;
                if let Some(outcome) = transition(vm.form, |state| state.settle(result)) {
                    vm.apply(effects_for(outcome));
                }
            })
        });
    }

    /// Clears the form and drops any image read still in progress. Ignored
    /// while a submission is in flight.
    pub fn reset(&self) {
        if self.form.with_untracked(FormState::is_submitting) {
            return;
        }
        self.read_task.with_value(TaskSlot::abort);
        dispatch(self.form, FormAction::Reset);
    }

    /// Reads the chosen image in the background; clearing the input drops it.
    /// Submitting is refused until the newest read has landed.
    pub fn attach_file(&self, file: Option<File>) {
        let form = self.form;
        let Some(file) = file else {
            self.read_task.with_value(TaskSlot::abort);
            dispatch(
                form,
                FormAction::AttachFile {
                    field: IMAGE_FIELD,
                    file: None,
                },
            );
            return;
        };
        let Some(token) = transition(form, |state| state.begin_read(IMAGE_FIELD)).flatten() else {
            return;
        };
        self.read_task.with_value(|slot| {
            slot.replace(async move {
                let result = read_upload(file).await.map_err(|err| {
                    log::error!("Could not read image: {}", err);
                    err.error
                });
                dispatch(
                    form,
                    FormAction::FinishRead {
                        field: IMAGE_FIELD,
                        token,
                        result,
                    },
                );
            })
        });
    }

    fn apply(&self, effects: Vec<SubmitEffect>) {
        for effect in effects {
            match effect {
                SubmitEffect::Notify { title, description } => {
                    self.notifications.notify(title, description);
                }
                SubmitEffect::Navigate(path) => self.navigate.with_value(|navigate| navigate(path)),
            }
        }
    }
}

pub fn use_products_add_view_model(navigate: impl Fn(&str) + 'static) -> ProductsAddViewModel {
    match use_context::<ProductsAddViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ProductsAddViewModel::new(navigate);
            provide_context(vm);
            vm
        }
    }
}
