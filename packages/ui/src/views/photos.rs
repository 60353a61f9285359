use dioxus::prelude::*;

use crate::views::backend_list::{list_state, use_backend_list, ListStatus};

const THUMBNAIL_SIZE: u32 = 256;

#[component]
pub fn PhotosView() -> Element {
    let photos = use_backend_list(|client| async move { client.photos().await });
    let (photos, loading, error) = list_state(&photos);

    rsx! {
        div {
            class: "page photos",
            h1 { "Photos" }
            ListStatus { loading, error, empty: photos.is_empty(), noun: "photos" }
            div {
                class: "photo-grid",
                for photo in photos {
                    figure {
                        key: "{photo.id}",
                        img {
                            src: "{photo.thumbnail_url(THUMBNAIL_SIZE)}",
                            alt: "{photo.filename}",
                            loading: "lazy",
                        }
                        figcaption { "{photo.filename}" }
                    }
                }
            }
        }
    }
}
