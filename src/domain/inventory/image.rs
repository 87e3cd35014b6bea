// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Version detection from container image references

use crate::infrastructure::constants::IMAGE_TAG_SEPARATOR;
use crate::shared::error::{InventoryError, Result};

/// Returns the text after the last `:` of an image reference, verbatim.
///
/// Build-metadata suffixes such as `-0` are kept. A registry port with no tag
/// (`registry:5000/etcd`) is not special-cased.
pub fn image_tag_version(image_ref: &str) -> Result<String> {
    image_ref
        .rsplit_once(IMAGE_TAG_SEPARATOR)
        .map(|(_, tag)| tag.to_string())
        .ok_or_else(|| InventoryError::malformed_image(image_ref))
}

/// Whether an image reference looks like it belongs to the component named by `marker`.
pub fn image_matches(image_ref: &str, marker: &str) -> bool {
    image_ref.contains(marker)
}
