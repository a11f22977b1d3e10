//! グレーディング状態管理
//!
//! 状態遷移: Empty → Ready → Grading → Ready
//!
//! - 画像アップロードはどの状態からでも可能（結果・エラーをクリア）
//! - Grading中はプリセット変更と再実行を拒否
//! - リクエストの結果は必ず Ready に戻して反映する

use log::{debug, info, warn};
use crate::catalog::{self, Profile};
use crate::client::{EditClient, EditOutcome, EditRequest};
use crate::error::{Error, Result};
use crate::image_data::{encode_base64, extract_base64_from_data_url, split_data_url, to_data_url, decode_base64};
use crate::prompts::compose_grade_prompt;

/// コントローラの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Ready,
    Grading,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Empty => "empty",
            Phase::Ready => "ready",
            Phase::Grading => "grading",
        }
    }
}

/// アップロードされた元画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
    display_url: String,
}

impl UploadedImage {
    pub fn from_bytes(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime_type = mime_type.into();
        let display_url = to_data_url(&mime_type, &encode_base64(&bytes));
        Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
            display_url,
        }
    }

    /// FileReader の `readAsDataURL` 結果から生成
    pub fn from_data_url(file_name: impl Into<String>, data_url: &str) -> Result<Self> {
        let (mime_type, bytes) = split_data_url(data_url)?;
        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
            display_url: data_url.to_string(),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn display_url(&self) -> &str {
        &self.display_url
    }

    /// 送信用のBase64本体
    pub fn base64(&self) -> String {
        match extract_base64_from_data_url(&self.display_url) {
            Some(payload) => payload.to_string(),
            None => encode_base64(&self.bytes),
        }
    }
}

/// グレーディング結果（元画像のMIMEタイプで組み立てたData URL）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    mime_type: String,
    data_url: String,
}

impl GradeResult {
    fn new(mime_type: &str, base64_payload: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data_url: to_data_url(mime_type, base64_payload),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn bytes(&self) -> Result<Vec<u8>> {
        let payload = extract_base64_from_data_url(&self.data_url).ok_or(Error::InvalidDataUrl)?;
        decode_base64(payload)
    }
}

/// 実行中のグレーディングを識別するチケット
///
/// アップロード/リセット後に届いた古い応答は世代番号で破棄する。
#[derive(Debug, Clone)]
pub struct GradeTicket {
    generation: u64,
    request: EditRequest,
}

impl GradeTicket {
    pub fn request(&self) -> &EditRequest {
        &self.request
    }
}

/// グレーディング状態コントローラ
#[derive(Debug, Clone)]
pub struct GradeController {
    phase: Phase,
    image: Option<UploadedImage>,
    result: Option<GradeResult>,
    camera: &'static Profile,
    film: &'static Profile,
    error: Option<String>,
    generation: u64,
}

impl Default for GradeController {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Empty,
            image: None,
            result: None,
            camera: catalog::default_camera(),
            film: catalog::default_film(),
            error: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Grading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn uploaded_image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn grade_result(&self) -> Option<&GradeResult> {
        self.result.as_ref()
    }

    pub fn selected_camera(&self) -> &'static Profile {
        self.camera
    }

    pub fn selected_film(&self) -> &'static Profile {
        self.film
    }

    /// 現在の選択で生成されるプロンプト
    pub fn prompt(&self) -> String {
        compose_grade_prompt(self.camera, self.film)
    }

    /// 画像をアップロード（既存の結果・エラーは破棄）
    pub fn upload_image(&mut self, image: UploadedImage) {
        if self.phase == Phase::Grading {
            warn!("upload during grading; pending response will be discarded");
        }
        debug!("upload: {} ({}, {} bytes)", image.file_name(), image.mime_type(), image.bytes().len());
        self.generation += 1;
        self.image = Some(image);
        self.result = None;
        self.error = None;
        self.phase = Phase::Ready;
    }

    pub fn select_camera(&mut self, id: &str) -> Result<()> {
        if self.is_loading() {
            return Err(Error::Busy);
        }
        self.camera = catalog::find_camera(id).ok_or_else(|| Error::UnknownCamera(id.to_string()))?;
        debug!("camera profile: {}", self.camera.id);
        Ok(())
    }

    pub fn select_film(&mut self, id: &str) -> Result<()> {
        if self.is_loading() {
            return Err(Error::Busy);
        }
        self.film = catalog::find_film(id).ok_or_else(|| Error::UnknownFilm(id.to_string()))?;
        debug!("film look: {}", self.film.id);
        Ok(())
    }

    /// グレーディング開始
    ///
    /// 画像がなければエラーメッセージを設定して `NoImageUploaded` を返す（Gradingには入らない）。
    pub fn begin_grade(&mut self) -> Result<GradeTicket> {
        if self.phase == Phase::Grading {
            return Err(Error::AlreadyGrading);
        }
        let Some(image) = &self.image else {
            self.error = Some(Error::NoImageUploaded.to_string());
            return Err(Error::NoImageUploaded);
        };

        let request = EditRequest {
            image_base64: image.base64(),
            mime_type: image.mime_type().to_string(),
            prompt: compose_grade_prompt(self.camera, self.film),
        };

        self.error = None;
        self.result = None;
        self.phase = Phase::Grading;
        info!("grading {} with {} + {}", image.file_name(), self.camera.id, self.film.id);

        Ok(GradeTicket {
            generation: self.generation,
            request,
        })
    }

    /// 応答を反映して Ready に戻す
    ///
    /// チケットが古い場合は何もせず `false` を返す。
    pub fn finish_grade(&mut self, ticket: &GradeTicket, result: Result<EditOutcome>) -> bool {
        if !self.is_current(ticket) {
            debug!("discarding stale grade response (generation {})", ticket.generation);
            return false;
        }
        // 失敗内容は error_message に記録済み
        let _ = self.settle(result);
        true
    }

    /// begin_grade → クライアント呼び出し（1回）→ finish_grade
    pub async fn apply_grade<C: EditClient>(&mut self, client: &C) -> Result<()> {
        let ticket = self.begin_grade()?;
        let mut in_flight = InFlight {
            controller: self,
            generation: ticket.generation,
            armed: true,
        };

        let result = client.edit(ticket.request()).await;

        in_flight.armed = false;
        in_flight.controller.settle(result)
    }

    /// 画像・結果・エラーをすべて破棄して Empty に戻す
    pub fn reset(&mut self) {
        debug!("reset");
        self.generation += 1;
        self.image = None;
        self.result = None;
        self.error = None;
        self.phase = Phase::Empty;
    }

    fn is_current(&self, ticket: &GradeTicket) -> bool {
        self.phase == Phase::Grading && ticket.generation == self.generation
    }

    fn settle(&mut self, result: Result<EditOutcome>) -> Result<()> {
        self.phase = Phase::Ready;

        let (message, error) = match result {
            Ok(EditOutcome::Image { data, mime_type }) => {
                let Some(image) = &self.image else {
                    return Err(Error::NoImageUploaded);
                };
                if let Some(returned) = mime_type.as_deref().filter(|m| *m != image.mime_type()) {
                    debug!("model returned {}, displaying as {}", returned, image.mime_type());
                }
                self.result = Some(GradeResult::new(image.mime_type(), &data));
                self.error = None;
                info!("grade complete");
                return Ok(());
            }
            Ok(EditOutcome::NoImage { text }) => {
                let mut message = format!("Failed to apply grade: {}", Error::NoImageProduced);
                if let Some(text) = text {
                    message.push_str(&format!(" Model response: {}", text));
                }
                (message, Error::NoImageProduced)
            }
            Err(e) => (format!("Failed to apply grade: {}", e), e),
        };

        warn!("{}", message);
        self.result = None;
        self.error = Some(message);
        Err(error)
    }
}

/// apply_grade のFutureが途中で破棄されても Grading に残さない
struct InFlight<'a> {
    controller: &'a mut GradeController,
    generation: u64,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let controller = &mut *self.controller;
        if self.armed && controller.phase == Phase::Grading && controller.generation == self.generation {
            let _ = controller.settle(Err(Error::Api("grade was interrupted".to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeClient {
        outcome: RefCell<Option<Result<EditOutcome>>>,
        calls: Cell<usize>,
        last_request: RefCell<Option<EditRequest>>,
    }

    impl FakeClient {
        fn returning(outcome: Result<EditOutcome>) -> Self {
            Self {
                outcome: RefCell::new(Some(outcome)),
                calls: Cell::new(0),
                last_request: RefCell::new(None),
            }
        }

        fn image(data: &str) -> Self {
            Self::returning(Ok(EditOutcome::Image { data: data.to_string(), mime_type: Some("image/png".to_string()) }))
        }
    }

    impl EditClient for FakeClient {
        async fn edit(&self, request: &EditRequest) -> Result<EditOutcome> {
            self.calls.set(self.calls.get() + 1);
            *self.last_request.borrow_mut() = Some(request.clone());
            self.outcome
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(Error::Api("called twice".to_string())))
        }
    }

    struct PendingClient;

    impl EditClient for PendingClient {
        async fn edit(&self, _request: &EditRequest) -> Result<EditOutcome> {
            std::future::pending().await
        }
    }

    fn image_a() -> UploadedImage {
        UploadedImage::from_bytes("a.jpg", "image/jpeg", b"image-a".to_vec())
    }

    #[test]
    fn test_fresh_controller_defaults() {
        let controller = GradeController::new();
        assert_eq!(controller.phase(), Phase::Empty);
        assert_eq!(controller.selected_camera().id, "generic-srgb");
        assert_eq!(controller.selected_film().id, "kodak-portra-400");
        assert!(!controller.is_loading());
        assert!(controller.error_message().is_none());
        assert!(controller.uploaded_image().is_none());
        assert!(controller.grade_result().is_none());
    }

    #[test]
    fn test_upload_moves_to_ready() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.uploaded_image().unwrap().file_name(), "a.jpg");
    }

    #[tokio::test]
    async fn test_upload_clears_result_and_error() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        controller.apply_grade(&FakeClient::image("QkJC")).await.unwrap();
        assert!(controller.grade_result().is_some());

        controller.upload_image(image_a());
        assert!(controller.grade_result().is_none());

        let _ = controller.apply_grade(&FakeClient::returning(Err(Error::Api("boom".into())))).await;
        assert!(controller.error_message().is_some());

        controller.upload_image(image_a());
        assert!(controller.error_message().is_none());
        assert_eq!(controller.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_apply_without_image() {
        let mut controller = GradeController::new();
        let client = FakeClient::image("QkJC");

        let result = controller.apply_grade(&client).await;

        assert!(matches!(result, Err(Error::NoImageUploaded)));
        assert_eq!(controller.error_message(), Some("Please upload an image first."));
        assert_eq!(controller.phase(), Phase::Empty);
        assert!(!controller.is_loading());
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_apply_success_scenario() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        controller.select_camera("sony-slog3").unwrap();
        controller.select_film("fuji-velvia-50").unwrap();
        let client = FakeClient::image("QkJC");

        controller.apply_grade(&client).await.unwrap();

        let result = controller.grade_result().expect("grade result missing");
        assert_eq!(result.data_url(), "data:image/jpeg;base64,QkJC");
        assert_eq!(result.mime_type(), "image/jpeg");
        assert_eq!(result.bytes().unwrap(), b"BBB");
        assert!(!controller.is_loading());
        assert!(controller.error_message().is_none());
        assert_eq!(client.calls.get(), 1);

        let request = client.last_request.borrow().clone().unwrap();
        assert_eq!(request.mime_type, "image/jpeg");
        assert_eq!(request.image_base64, encode_base64(b"image-a"));
        assert!(request.prompt.contains("Sony S-Log3/S-Gamut3.Cine"));
        assert!(request.prompt.contains("inspired by FJ Velvia 50"));
    }

    #[tokio::test]
    async fn test_apply_no_image_scenario() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());

        let result = controller
            .apply_grade(&FakeClient::returning(Ok(EditOutcome::NoImage { text: None })))
            .await;

        assert!(matches!(result, Err(Error::NoImageProduced)));
        assert!(controller.error_message().unwrap().contains("did not return an image"));
        assert!(controller.grade_result().is_none());
        assert!(!controller.is_loading());
        assert_eq!(controller.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_no_image_includes_model_text() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());

        let _ = controller
            .apply_grade(&FakeClient::returning(Ok(EditOutcome::NoImage {
                text: Some("I cannot do that".to_string()),
            })))
            .await;

        assert!(controller.error_message().unwrap().contains("I cannot do that"));
    }

    #[tokio::test]
    async fn test_apply_transport_failure_scenario() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());

        let result = controller
            .apply_grade(&FakeClient::returning(Err(Error::Api("network timeout".to_string()))))
            .await;

        assert!(result.is_err());
        let message = controller.error_message().unwrap();
        assert!(message.contains("network timeout"));
        assert!(message.starts_with("Failed to apply grade: "));
        assert!(!controller.is_loading());
        assert!(controller.grade_result().is_none());
    }

    #[test]
    fn test_selection_rejected_while_grading() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        let _ticket = controller.begin_grade().unwrap();

        assert!(matches!(controller.select_camera("sony-slog3"), Err(Error::Busy)));
        assert!(matches!(controller.select_film("fuji-velvia-50"), Err(Error::Busy)));
        assert_eq!(controller.selected_camera().id, "generic-srgb");
    }

    #[test]
    fn test_unknown_selection_rejected() {
        let mut controller = GradeController::new();
        assert!(matches!(controller.select_camera("nope"), Err(Error::UnknownCamera(_))));
        assert!(matches!(controller.select_film("nope"), Err(Error::UnknownFilm(_))));
        assert_eq!(controller.selected_camera().id, "generic-srgb");
        assert_eq!(controller.selected_film().id, "kodak-portra-400");
    }

    #[test]
    fn test_reentrant_begin_rejected() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        let _ticket = controller.begin_grade().unwrap();

        assert!(matches!(controller.begin_grade(), Err(Error::AlreadyGrading)));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_begin_then_finish() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        let ticket = controller.begin_grade().unwrap();
        assert_eq!(controller.phase(), Phase::Grading);

        let applied = controller.finish_grade(
            &ticket,
            Ok(EditOutcome::Image { data: "QkJC".to_string(), mime_type: None }),
        );

        assert!(applied);
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.grade_result().unwrap().data_url(), "data:image/jpeg;base64,QkJC");
    }

    #[test]
    fn test_stale_response_after_upload_is_ignored() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        let ticket = controller.begin_grade().unwrap();

        controller.upload_image(UploadedImage::from_bytes("b.png", "image/png", b"image-b".to_vec()));
        let applied = controller.finish_grade(
            &ticket,
            Ok(EditOutcome::Image { data: "QkJC".to_string(), mime_type: None }),
        );

        assert!(!applied);
        assert!(controller.grade_result().is_none());
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.uploaded_image().unwrap().file_name(), "b.png");
    }

    #[test]
    fn test_stale_response_after_reset_is_ignored() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        let ticket = controller.begin_grade().unwrap();
        controller.reset();

        assert!(!controller.finish_grade(&ticket, Err(Error::Api("late".to_string()))));
        assert_eq!(controller.phase(), Phase::Empty);
        assert!(controller.error_message().is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());
        controller.select_film("cinestill-800t").unwrap();
        controller.apply_grade(&FakeClient::image("QkJC")).await.unwrap();

        controller.reset();

        assert_eq!(controller.phase(), Phase::Empty);
        assert!(controller.uploaded_image().is_none());
        assert!(controller.grade_result().is_none());
        assert!(controller.error_message().is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_grade_returns_to_ready() {
        let mut controller = GradeController::new();
        controller.upload_image(image_a());

        tokio::select! {
            biased;
            _ = controller.apply_grade(&PendingClient) => panic!("pending client resolved"),
            _ = std::future::ready(()) => {}
        }

        assert_eq!(controller.phase(), Phase::Ready);
        assert!(!controller.is_loading());
        assert!(controller.error_message().unwrap().contains("interrupted"));
    }

    #[test]
    fn test_uploaded_image_from_data_url() {
        let image = UploadedImage::from_data_url("c.png", "data:image/png;base64,QUJD").unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.bytes(), b"ABC");
        assert_eq!(image.display_url(), "data:image/png;base64,QUJD");
        assert_eq!(image.base64(), "QUJD");
    }

    #[test]
    fn test_uploaded_image_from_bytes_display_url() {
        let image = UploadedImage::from_bytes("d.png", "image/png", b"ABC".to_vec());
        assert_eq!(image.display_url(), "data:image/png;base64,QUJD");
    }

    #[test]
    fn test_prompt_follows_selection() {
        let mut controller = GradeController::new();
        controller.select_camera("dji-dlog").unwrap();
        assert!(controller.prompt().contains("DJI D-Log"));
    }
}
