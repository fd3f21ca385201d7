//! Reels (one per product record) and the media slides inside them.

use super::axis::{Axis, CarouselAxis};
use crate::data::{ProductId, ProductRecord};
use crate::media::{MediaElement, ProgressController, ProgressView};
use crate::settings::WidgetSettings;
use crate::zoom::{HoverMagnifier, ZoomGesture, ZoomView};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlideKind {
    Video,
    Image { url: String },
    /// Record has neither video nor images
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct MediaSlide {
    pub kind: SlideKind,
    /// Spinner shown until the media reports it can render
    pub loading: bool,
    pub zoom: Option<ZoomGesture>,
    pub hover: Option<HoverMagnifier>,
}

impl MediaSlide {
    fn video() -> Self {
        Self {
            kind: SlideKind::Video,
            loading: true,
            zoom: None,
            hover: None,
        }
    }

    fn image(url: &str, settings: &WidgetSettings) -> Self {
        Self {
            kind: SlideKind::Image { url: url.to_string() },
            loading: true,
            zoom: Some(ZoomGesture::new(settings)),
            hover: Some(HoverMagnifier::new()),
        }
    }

    fn placeholder() -> Self {
        Self {
            kind: SlideKind::Placeholder,
            loading: false,
            zoom: None,
            hover: None,
        }
    }

    /// Carousel swiping is allowed while this slide is active.
    pub fn swipe_enabled(&self) -> bool {
        self.zoom.as_ref().is_none_or(ZoomGesture::swipe_enabled)
    }

    pub fn reset_zoom(&mut self) {
        if let Some(zoom) = self.zoom.as_mut() {
            zoom.reset();
        }
        if let Some(hover) = self.hover.as_mut() {
            hover.pointer_leave();
        }
    }

    pub fn view(&self) -> SlideView {
        SlideView {
            kind: self.kind.clone(),
            loading: self.loading,
            zoom: self.zoom.as_ref().map(ZoomGesture::view),
            hover_origin: self
                .hover
                .as_ref()
                .filter(|hover| hover.is_hovering())
                .map(|hover| (hover.origin().x, hover.origin().y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideView {
    #[serde(flatten)]
    pub kind: SlideKind,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<ZoomView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_origin: Option<(f32, f32)>,
}

/// The video of a reel and its controls.
#[derive(Debug)]
pub struct VideoSlot<M> {
    pub media: M,
    pub progress: ProgressController,
}

/// One outer slide: a product record's media on a horizontal axis.
#[derive(Debug)]
pub struct Reel<M> {
    pub record_id: ProductId,
    pub video: Option<VideoSlot<M>>,
    pub slides: Vec<MediaSlide>,
    pub inner: CarouselAxis,
}

impl<M: MediaElement> Reel<M> {
    /// Slide 0 is the video when the record has one, then one slide per image.
    pub fn build(record: &ProductRecord, settings: &WidgetSettings, make_media: &mut impl FnMut(&str) -> M) -> Self {
        let video = record.video.as_deref().map(|url| {
            let mut media = make_media(url);
            let progress = ProgressController::new(settings);
            media.set_looping(true);
            progress.apply_mute(&mut media);
            VideoSlot { media, progress }
        });

        let mut slides = Vec::with_capacity(record.images.len() + 1);
        if video.is_some() {
            slides.push(MediaSlide::video());
        }
        slides.extend(record.images.iter().map(|url| MediaSlide::image(url, settings)));
        if slides.is_empty() {
            slides.push(MediaSlide::placeholder());
        }

        let inner = CarouselAxis::new(Axis::Horizontal, slides.len(), settings);
        Self {
            record_id: record.id.clone(),
            video,
            slides,
            inner,
        }
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /// The video slide is the one showing.
    pub fn video_slide_active(&self) -> bool {
        self.has_video() && self.inner.active_index() == 0
    }

    pub fn active_slide(&self) -> Option<&MediaSlide> {
        self.slides.get(self.inner.active_index())
    }

    pub fn active_slide_mut(&mut self) -> Option<&mut MediaSlide> {
        self.slides.get_mut(self.inner.active_index())
    }

    pub fn image_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|slide| matches!(slide.kind, SlideKind::Image { .. }))
            .count()
    }

    pub fn is_playing(&self) -> bool {
        self.video.as_ref().is_some_and(|slot| !slot.media.is_paused())
    }

    pub fn pause(&mut self) {
        if let Some(slot) = self.video.as_mut() {
            slot.media.pause();
        }
    }

    pub fn view(&self) -> ReelView {
        ReelView {
            record_id: self.record_id.clone(),
            active_slide: self.inner.active_index(),
            slides: self.slides.iter().map(MediaSlide::view).collect(),
            playing: self.is_playing(),
            progress: self.video.as_ref().map(|slot| slot.progress.view()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReelView {
    pub record_id: ProductId,
    pub active_slide: usize,
    pub slides: Vec<SlideView>,
    pub playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressView>,
}
