// Render layer: turns enriched projects into the static portfolio page.

pub mod markup;
