use super::*;

impl Backend {
    pub(super) async fn handle_did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!(%uri, "active document");
        *self.active_document.write().await = Some(uri);
    }

    /// Forget the active document only when the closed one is it.
    pub(super) async fn handle_did_close(&self, params: DidCloseTextDocumentParams) {
        let mut active = self.active_document.write().await;
        if active.as_ref() == Some(&params.text_document.uri) {
            *active = None;
        }
    }

    #[cfg(test)]
    pub(super) async fn active_document(&self) -> Option<Url> {
        self.active_document.read().await.clone()
    }
}
