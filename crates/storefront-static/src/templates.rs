//! Template engine for rendering catalog cards and product detail fragments.

use std::fmt::Write;

use minijinja::{
    context, escape_formatter, AutoEscape, Environment, Output, State, UndefinedBehavior, Value,
};

use storefront_catalog::IndexedItem;

/// Name of the catalog card template.
pub const CARD_TEMPLATE_NAME: &str = "card.html";

/// Name of the product detail template.
pub const DETAIL_TEMPLATE_NAME: &str = "detail.html";

/// Source text for the two page templates.
///
/// Both are registered under `.html` names so every substituted value is
/// HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSources {
    /// Template for one card in the catalog grid
    pub card: String,
    /// Template for the body of a product detail page
    pub detail: String,
}

impl Default for TemplateSources {
    fn default() -> Self {
        Self {
            card: CARD_TEMPLATE.to_string(),
            detail: DETAIL_TEMPLATE.to_string(),
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        Self::from_sources(TemplateSources::default())
    }

    /// Create a template engine from the given template sources.
    ///
    /// Fails if either template does not compile.
    pub fn from_sources(sources: TemplateSources) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_formatter(html_formatter);

        env.add_template_owned(CARD_TEMPLATE_NAME, sources.card)?;
        env.add_template_owned(DETAIL_TEMPLATE_NAME, sources.detail)?;

        Ok(Self { env })
    }

    /// Render the catalog card for one item.
    pub fn render_card(&self, entry: &IndexedItem) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(CARD_TEMPLATE_NAME)?;
        let item = &entry.item;

        tmpl.render(context! {
            index => entry.index,
            name => &item.name,
            price => &item.price,
            image_link => &item.image_link,
            category => &item.category,
        })
    }

    /// Render every card in order and concatenate them.
    ///
    /// The first failure aborts the whole grid.
    pub fn render_cards(&self, entries: &[IndexedItem]) -> Result<String, minijinja::Error> {
        let mut grid = String::new();
        for entry in entries {
            grid.push_str(&self.render_card(entry)?);
        }
        Ok(grid)
    }

    /// Render the detail fragment that sits between the shop header and footer.
    pub fn render_detail(&self, entry: &IndexedItem) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(DETAIL_TEMPLATE_NAME)?;
        let item = &entry.item;

        tmpl.render(context! {
            index => entry.index,
            name => &item.name,
            price => &item.price,
            description => &item.description,
            image_link => &item.image_link,
            link => &item.link,
        })
    }
}

/// Formatter that escapes strings like minijinja's default, but leaves `/` alone
/// so URLs and image paths come out verbatim.
fn html_formatter(
    out: &mut Output,
    state: &State,
    value: &Value,
) -> Result<(), minijinja::Error> {
    if matches!(state.auto_escape(), AutoEscape::Html) && !value.is_safe() {
        if let Some(s) = value.as_str() {
            out.write_str(&html_escape(s))?;
            return Ok(());
        }
    }
    escape_formatter(out, state, value)
}

/// Escape HTML special characters including single quotes.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const CARD_TEMPLATE: &str = r##"
<div class="w-full md:w-1/3 xl:w-1/4 p-6 flex flex-col idk {{ category }}">
  <a href="{{ index }}.html">
    <img class="hover:grow hover:shadow-lg" src="{{ image_link }}">
    <div class="pt-3 flex items-center justify-between">
      <p class="">{{ name }}</p>
    </div>
    <p class="pt-1 text-gray-900">{{ price }}</p>
  </a>
</div>
"##;

const DETAIL_TEMPLATE: &str = r##"
<main class="w-full flex flex-col lg:flex-row">
  <!-- Gallery -->
  <section class="h-fit flex-col gap-8 mt-4 sm:flex sm:flex-row sm:gap-4 sm:h-full sm:mt-6 sm:mx-2 md:gap-8 md:mx-4 lg:flex-col lg:mx-0 lg:mt-36">
    <picture class="relative flex items-center bg-orange sm:bg-transparent">
      <img
        src="{{ image_link }}"
        alt="{{ name }}"
        class="block sm:rounded-xl xl:w-[70%] xl:rounded-xl m-auto pointer-events-none transition duration-300 lg:w-3/4 lg:pointer-events-auto lg:cursor-pointer lg:hover:shadow-xl"
        id="hero"
      />
    </picture>
  </section>

  <!-- Text -->
  <section class="w-full p-6 lg:mt-36 lg:pr-20 lg:py-10 2xl:pr-40 2xl:mt-40">
    <h1 class="text-very-dark m-4 font-bold text-3xl lg:text-4xl">
      {{ name }}
    </h1>
    <p class="text-dark-grayish mb-6 text-base sm:text-lg">
      {{ description }}
    </p>

    <div class="flex items-center justify-between mb-6 sm:flex-col sm:items-start">
      <div class="flex items-center gap-4">
        <h3 class="text-very-dark font-bold text-3xl inline-block">
          {{ price }}
        </h3>
      </div>
    </div>

    <a href="{{ link }}">
      <button
        class="w-full h-10 bg-orange py-2 flex items-center justify-center gap-4 text-xl rounded-lg font-bold text-light shadow-md shadow-orange hover:brightness-125 transition select-none"
        id="add-cart"
      >
        <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" class="bi bi-cart2" viewBox="0 0 16 16">
          <path d="M0 2.5A.5.5 0 0 1 .5 2H2a.5.5 0 0 1 .485.379L2.89 4H14.5a.5.5 0 0 1 .485.621l-1.5 6A.5.5 0 0 1 13 11H4a.5.5 0 0 1-.485-.379L1.61 3H.5a.5.5 0 0 1-.5-.5M3.14 5l1.25 5h8.22l1.25-5zM5 13a1 1 0 1 0 0 2 1 1 0 0 0 0-2m-2 1a2 2 0 1 1 4 0 2 2 0 0 1-4 0m9-1a1 1 0 1 0 0 2 1 1 0 0 0 0-2m-2 1a2 2 0 1 1 4 0 2 2 0 0 1-4 0"/>
        </svg>
        Buy Now
      </button>
    </a>
  </section>
</main>
"##;
