use super::*;

use crate::validation::{ContactFormValidator, Field, FieldErrors};

/// Session state behind one phonebook view: the store plus the query, the
/// page, the draft and its errors. Front-ends read from it and forward user
/// events into it.
pub struct PhoneBook {
    store: ContactStore,
    validator: ContactFormValidator,
    query: String,
    pager: Pager,
    draft: ContactDraft,
    form_errors: FieldErrors,
    loading: bool,
    load_error: Option<String>,
}

impl PhoneBook {
    pub fn new(store: ContactStore, validator: ContactFormValidator) -> Self {
        let mut book = Self {
            store,
            validator,
            query: String::new(),
            pager: Pager::new(),
            draft: ContactDraft::default(),
            form_errors: FieldErrors::default(),
            loading: false,
            load_error: None,
        };
        book.sync_view();
        book
    }

    /// Runs a whole load. Front-ends that keep handling events while the
    /// remote is outstanding use [`PhoneBook::begin_load`] and
    /// [`PhoneBook::finish_load`] around their own await instead.
    pub async fn load(&mut self, cancel: &CancelToken) -> LoadOutcome {
        let pending = self.begin_load();
        let fetched = pending.resolve().await;
        self.finish_load(fetched, cancel)
    }

    /// Marks the view as loading and clears any earlier load error.
    pub fn begin_load(&mut self) -> PendingLoad {
        self.loading = true;
        self.load_error = None;
        self.store.begin_load()
    }

    pub fn finish_load(&mut self, fetched: FetchedContacts, cancel: &CancelToken) -> LoadOutcome {
        let outcome = self.store.apply_load(fetched, cancel);
        self.loading = false;

        if let LoadOutcome::Fallback { error: Some(msg) } = &outcome {
            self.load_error = Some(msg.clone());
        }
        self.sync_view();
        outcome
    }

    fn sync_view(&mut self) {
        let len = filter(self.store.contacts(), &self.query).len();
        self.pager.sync_len(len);
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pager.reset();
        self.sync_view();
    }

    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        filter(self.store.contacts(), &self.query)
    }

    pub fn current_contact(&self) -> Option<&Contact> {
        let view = self.filtered_contacts();
        self.pager.current(&view).copied()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn page_label(&self) -> String {
        self.pager.label()
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Jumps to a 0-based position, clamped to the last result.
    pub fn go_to_page(&mut self, index: usize) {
        self.pager.go_to(index);
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    pub fn update_draft_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Phone => self.draft.phone = value,
            Field::Email => self.draft.email = value,
        }
    }

    /// Validates the current draft. On success the contact is stored, the
    /// form is cleared and the view jumps back to the first page.
    pub fn submit(&mut self) -> Result<Contact, FieldErrors> {
        let errors = self.validator.validate(&self.draft);
        if !errors.is_empty() {
            self.form_errors = errors.clone();
            return Err(errors);
        }

        let contact = self.store.append(&self.draft);
        self.draft.clear();
        self.form_errors.clear();
        self.pager.reset();
        self.sync_view();
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemStorage;
    use crate::validation::{EmailPolicy, NAME_TOO_SHORT};

    async fn loaded_book(policy: EmailPolicy) -> PhoneBook {
        let store = ContactStore::new(Box::new(MemStorage::new()));
        let mut book = PhoneBook::new(store, ContactFormValidator::new(policy));
        book.load(&CancelToken::new()).await;
        book
    }

    #[test]
    fn starts_empty_before_load() {
        let store = ContactStore::new(Box::new(MemStorage::new()));
        let book = PhoneBook::new(store, ContactFormValidator::default());

        assert!(!book.loading());
        assert!(book.current_contact().is_none());
        assert_eq!(book.page_label(), "No results");
    }

    #[tokio::test]
    async fn paging_through_fallback_list_clamps_at_the_end() {
        let mut book = loaded_book(EmailPolicy::Required).await;
        book.set_query("an");

        let view_len = book.filtered_contacts().len();
        assert!(view_len > 1);
        for _ in 0..view_len + 3 {
            book.next_page();
        }

        assert_eq!(book.pager().index(), view_len - 1);
        assert_eq!(book.page_label(), format!("Contact {view_len} of {view_len}"));
        let last = book.filtered_contacts()[view_len - 1].clone();
        assert_eq!(book.current_contact(), Some(&last));
    }

    #[tokio::test]
    async fn query_change_resets_page() {
        let mut book = loaded_book(EmailPolicy::Required).await;
        book.next_page();
        book.next_page();
        assert_eq!(book.pager().index(), 2);

        book.set_query("ny");
        assert_eq!(book.pager().index(), 0);
        assert!(book.current_contact().is_none());
        assert_eq!(book.page_label(), "No results");
    }

    #[tokio::test]
    async fn go_to_page_clamps_to_the_last_result() {
        let mut book = loaded_book(EmailPolicy::Required).await;

        book.go_to_page(usize::MAX);
        assert_eq!(book.page_label(), "Contact 10 of 10");

        book.go_to_page(3);
        assert_eq!(book.pager().index(), 3);
    }

    #[tokio::test]
    async fn successful_reload_clears_an_earlier_load_error() {
        let mut book = loaded_book(EmailPolicy::Required).await;
        book.load_error = Some("Couldn't load contacts from the server.".to_string());

        let pending = book.begin_load();
        assert!(book.loading());
        assert_eq!(book.load_error(), None);

        let fetched = pending.resolve().await;
        let outcome = book.finish_load(fetched, &CancelToken::new());

        assert_eq!(outcome, LoadOutcome::Persisted);
        assert!(!book.loading());
        assert_eq!(book.load_error(), None);
    }

    #[tokio::test]
    async fn rejected_submit_keeps_draft_and_errors() {
        let mut book = loaded_book(EmailPolicy::Required).await;
        book.update_draft_field(Field::Name, "J");
        book.update_draft_field(Field::Phone, "(555) 555-5555");
        book.update_draft_field(Field::Email, "j@d.com");

        let errors = book.submit().unwrap_err();

        assert_eq!(errors.get(Field::Name), Some(NAME_TOO_SHORT));
        assert_eq!(book.form_errors(), &errors);
        assert_eq!(book.draft().name, "J");
        assert_eq!(book.contacts().len(), 10);
    }

    #[tokio::test]
    async fn accepted_submit_prepends_and_clears_form() {
        let mut book = loaded_book(EmailPolicy::Optional).await;
        book.next_page();
        book.update_draft_field(Field::Name, "  Jane Doe ");
        book.update_draft_field(Field::Phone, "(555) 555-5555");

        let contact = book.submit().unwrap();

        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email, "");
        assert_eq!(book.contacts()[0], contact);
        assert_eq!(book.current_contact(), Some(&contact));
        assert_eq!(book.draft(), &ContactDraft::default());
        assert!(book.form_errors().is_empty());
        assert_eq!(book.page_label(), "Contact 1 of 11");
    }
}
