use super::ItemView;
use crate::core::xml::Element;
use serde::Serialize;

/// Image slot names shared by the item and by every image set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    Swatch,
    Small,
    Thumbnail,
    Tiny,
    Medium,
    Large,
}

impl ImageSize {
    pub const ALL: [Self; 6] = [
        Self::Swatch,
        Self::Small,
        Self::Thumbnail,
        Self::Tiny,
        Self::Medium,
        Self::Large,
    ];

    pub const fn element_name(self) -> &'static str {
        match self {
            Self::Swatch => "SwatchImage",
            Self::Small => "SmallImage",
            Self::Thumbnail => "ThumbnailImage",
            Self::Tiny => "TinyImage",
            Self::Medium => "MediumImage",
            Self::Large => "LargeImage",
        }
    }
}

/// One image slot; every field is independently optional
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    element: Element<'a>,
}

impl<'a> Image<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn is_present(&self) -> bool {
        self.element.is_present()
    }

    pub fn url(&self) -> Option<&'a str> {
        self.element.text("URL")
    }

    pub fn height(&self) -> Option<u64> {
        self.element.uint("Height")
    }

    pub fn width(&self) -> Option<u64> {
        self.element.uint("Width")
    }

    pub fn snapshot(&self) -> Option<ImageSnapshot<'a>> {
        Some(ImageSnapshot {
            url: self.url()?,
            height: self.height(),
            width: self.width(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSnapshot<'a> {
    pub url: &'a str,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

/// Named accessors for the six slots, over anything exposing `image(size)`.
///
/// Implemented by [`ImageSet`] and by every shape with the [`Images`] group.
pub trait ImageSlots<'a> {
    fn image(&self, size: ImageSize) -> Image<'a>;

    fn swatch_image(&self) -> Image<'a> {
        self.image(ImageSize::Swatch)
    }

    fn small_image(&self) -> Image<'a> {
        self.image(ImageSize::Small)
    }

    fn thumbnail_image(&self) -> Image<'a> {
        self.image(ImageSize::Thumbnail)
    }

    fn tiny_image(&self) -> Image<'a> {
        self.image(ImageSize::Tiny)
    }

    fn medium_image(&self) -> Image<'a> {
        self.image(ImageSize::Medium)
    }

    fn large_image(&self) -> Image<'a> {
        self.image(ImageSize::Large)
    }
}

/// An `<ImageSet>` element, such as the `variant` or `primary` set
#[derive(Debug, Clone, Copy)]
pub struct ImageSet<'a> {
    element: Element<'a>,
}

impl<'a> ImageSet<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn is_present(&self) -> bool {
        self.element.is_present()
    }

    pub fn category(&self) -> Option<&'a str> {
        self.element.attribute("Category")
    }
}

impl<'a> ImageSlots<'a> for ImageSet<'a> {
    fn image(&self, size: ImageSize) -> Image<'a> {
        Image::new(self.element.first(size.element_name()))
    }
}

/// `Images` response group.
///
/// Item-level slots come from [`ImageSlots`], which every `Images` shape
/// implements.
pub trait Images<'a>: ItemView<'a> {
    /// Image set by category; absent sets answer with absent images
    fn image_set(&self, category: &str) -> ImageSet<'a> {
        let element = self
            .element()
            .query("ImageSets/ImageSet")
            .into_iter()
            .find(|set| set.attribute("Category") == Some(category))
            .unwrap_or_else(|| Element::absent(self.element().namespace()));
        ImageSet::new(element)
    }

    fn image_set_variant(&self) -> ImageSet<'a> {
        self.image_set("variant")
    }

    fn image_set_primary(&self) -> ImageSet<'a> {
        self.image_set("primary")
    }

    fn image_sets(&self) -> Vec<ImageSet<'a>> {
        self.element()
            .query("ImageSets/ImageSet")
            .into_iter()
            .map(ImageSet::new)
            .collect()
    }
}

// item-level slots sit directly under `<Item>`
impl<'a, T: Images<'a>> ImageSlots<'a> for T {
    fn image(&self, size: ImageSize) -> Image<'a> {
        Image::new(self.element().first(size.element_name()))
    }
}
