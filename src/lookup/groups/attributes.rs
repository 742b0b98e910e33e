use super::ItemView;
use crate::core::xml::Element;

/// Height/length/width/weight of either the item or its package.
///
/// Values are reported as integers in the unit named by the `Units`
/// attribute (usually hundredths of inches or pounds).
#[derive(Debug, Clone, Copy)]
pub struct Dimensions<'a> {
    element: Element<'a>,
}

impl<'a> Dimensions<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn is_present(&self) -> bool {
        self.element.is_present()
    }

    pub fn height(&self) -> Option<i64> {
        self.element.int("Height")
    }

    pub fn length(&self) -> Option<i64> {
        self.element.int("Length")
    }

    pub fn width(&self) -> Option<i64> {
        self.element.int("Width")
    }

    pub fn weight(&self) -> Option<i64> {
        self.element.int("Weight")
    }

    /// `Units` attribute of one measurement, e.g. `units("Weight")`
    pub fn units(&self, measurement: &str) -> Option<&'a str> {
        self.element.first(measurement).attribute("Units")
    }
}

macro_rules! attribute_text {
    ($lt:lifetime; $($(#[$meta:meta])* $method:ident => $name:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            fn $method(&self) -> Option<&$lt str> {
                self.element().text(concat!("ItemAttributes/", $name))
            }
        )*
    };
}

/// `ItemAttributes` response group
pub trait ItemAttributes<'a>: ItemView<'a> {
    attribute_text! {
        'a;
        actor => "Actor",
        artist => "Artist",
        aspect_ratio => "AspectRatio",
        audience_rating => "AudienceRating",
        audio_format => "AudioFormat",
        author => "Author",
        binding => "Binding",
        brand => "Brand",
        category => "Category",
        cero_age_rating => "CEROAgeRating",
        clothing_size => "ClothingSize",
        color => "Color",
        ean => "EAN",
        label => "Label",
        manufacturer => "Manufacturer",
        model => "Model",
        /// Manufacturer part number
        mpn => "MPN",
        part_number => "PartNumber",
        product_group => "ProductGroup",
        product_type_name => "ProductTypeName",
        publication_date => "PublicationDate",
        publisher => "Publisher",
        release_date => "ReleaseDate",
        studio => "Studio",
        title => "Title",
        upc => "UPC",
    }

    fn catalog_number_list(&self) -> Vec<&'a str> {
        self.element()
            .texts("ItemAttributes/CatalogNumberList/CatalogNumberListElement")
    }

    fn ean_list(&self) -> Vec<&'a str> {
        self.element()
            .texts("ItemAttributes/EANList/EANListElement")
    }

    fn upc_list(&self) -> Vec<&'a str> {
        self.element()
            .texts("ItemAttributes/UPCList//UPCListElement")
    }

    /// Feature bullet points, in document order
    fn features(&self) -> Vec<&'a str> {
        self.element().texts("ItemAttributes//Feature")
    }

    fn is_adult_product(&self) -> Option<bool> {
        self.element().flag("ItemAttributes/IsAdultProduct")
    }

    fn list_price(&self) -> Option<f64> {
        self.element()
            .float("ItemAttributes/ListPrice/FormattedPrice")
    }

    fn number_of_items(&self) -> Option<u64> {
        self.element().uint("ItemAttributes/NumberOfItems")
    }

    fn package_quantity(&self) -> Option<u64> {
        self.element().uint("ItemAttributes/PackageQuantity")
    }

    fn item_dimensions(&self) -> Dimensions<'a> {
        Dimensions::new(self.element().first("ItemAttributes/ItemDimensions"))
    }

    fn package_dimensions(&self) -> Dimensions<'a> {
        Dimensions::new(self.element().first("ItemAttributes/PackageDimensions"))
    }
}
