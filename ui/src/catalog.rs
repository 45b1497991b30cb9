//! Catalog view-model: search, filters, pagination.
//!
//! The catalog fetches the full pet list once; everything here is a pure
//! function of that list and the current [`CatalogQuery`]. Pages are
//! 1-indexed and [`PAGE_SIZE`] wide; changing the search term or any
//! filter dimension resets the query to page 1.

use api::{Gender, Pet, PetSize, Species};

/// Pets shown per catalog page.
pub const PAGE_SIZE: usize = 8;

/// Pets showcased on the landing page.
pub const FEATURED_COUNT: usize = 6;

/// The leading slice of the catalog shown in the landing-page showcase.
pub fn featured(pets: &[Pet]) -> &[Pet] {
    &pets[..pets.len().min(FEATURED_COUNT)]
}

/// Ephemeral query state of the catalog view.
///
/// Fields are private so every mutation goes through a setter, which is
/// where the page-reset rule lives. `None` in a filter dimension is the
/// "all" sentinel.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogQuery {
    search: String,
    species: Option<Species>,
    gender: Option<Gender>,
    size: Option<PetSize>,
    page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            species: None,
            gender: None,
            size: None,
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn species(&self) -> Option<Species> {
        self.species
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn size(&self) -> Option<PetSize> {
        self.size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_species(&mut self, species: Option<Species>) {
        self.species = species;
        self.page = 1;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
        self.page = 1;
    }

    pub fn set_size(&mut self, size: Option<PetSize>) {
        self.size = size;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    fn matches(&self, pet: &Pet) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || pet.name.to_lowercase().contains(&term)
            || pet.breed.to_lowercase().contains(&term)
            || pet.description.to_lowercase().contains(&term);

        let matches_species = self.species.map_or(true, |s| pet.species == s);
        let matches_gender = self.gender.map_or(true, |g| pet.gender == g);
        let matches_size = self.size.map_or(true, |s| pet.size == s);

        matches_search && matches_species && matches_gender && matches_size
    }

    /// All pets matching the search term and the active filters, in their
    /// original order.
    pub fn filter<'a>(&self, pets: &'a [Pet]) -> Vec<&'a Pet> {
        pets.iter().filter(|pet| self.matches(pet)).collect()
    }

    /// The current page of the filtered list. A page past the end yields
    /// an empty slice, not an error.
    pub fn paginate<'a>(&self, filtered: &[&'a Pet]) -> Vec<&'a Pet> {
        let start = self.page.saturating_sub(1) * PAGE_SIZE;
        filtered.iter().skip(start).take(PAGE_SIZE).copied().collect()
    }

    /// Number of pages for a filtered count: `ceil(count / PAGE_SIZE)`.
    pub fn total_pages(count: usize) -> usize {
        count.div_ceil(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PetStatus;

    fn pet(id: usize, name: &str, species: Species, gender: Gender, size: PetSize) -> Pet {
        Pet {
            id: format!("p{id}"),
            name: name.to_string(),
            species,
            breed: "Mixed".to_string(),
            age: 2,
            gender,
            color: "brown".to_string(),
            size,
            description: "A lovely companion.".to_string(),
            image: String::new(),
            status: PetStatus::Available,
            owner_id: "u1".to_string(),
            owner: None,
        }
    }

    fn sample(count: usize) -> Vec<Pet> {
        (1..=count)
            .map(|i| pet(i, &format!("Pet {i}"), Species::Dog, Gender::Male, PetSize::Medium))
            .collect()
    }

    #[test]
    fn empty_search_matches_everything() {
        let pets = sample(3);
        let query = CatalogQuery::default();
        assert_eq!(query.filter(&pets).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_name_breed_and_description() {
        let mut rex = pet(1, "Rex", Species::Dog, Gender::Male, PetSize::Large);
        rex.breed = "Labrador".to_string();
        rex.description = "Loves long walks.".to_string();
        let mimi = pet(2, "Mimi", Species::Cat, Gender::Female, PetSize::Small);
        let pets = vec![rex, mimi];

        let mut query = CatalogQuery::default();
        query.set_search("REX");
        assert_eq!(query.filter(&pets).len(), 1);

        query.set_search("labrador");
        assert_eq!(query.filter(&pets).len(), 1);

        query.set_search("long walks");
        assert_eq!(query.filter(&pets).len(), 1);

        query.set_search("parrot");
        assert!(query.filter(&pets).is_empty());
    }

    #[test]
    fn filters_narrow_only_when_set() {
        let pets = vec![
            pet(1, "Rex", Species::Dog, Gender::Male, PetSize::Large),
            pet(2, "Bela", Species::Dog, Gender::Female, PetSize::Small),
            pet(3, "Mimi", Species::Cat, Gender::Female, PetSize::Small),
        ];

        let mut query = CatalogQuery::default();
        query.set_species(Some(Species::Dog));
        assert_eq!(query.filter(&pets).len(), 2);

        query.set_gender(Some(Gender::Female));
        assert_eq!(query.filter(&pets).len(), 1);
        assert_eq!(query.filter(&pets)[0].name, "Bela");

        // Back to the sentinel: dimension no longer narrows.
        query.set_species(None);
        assert_eq!(query.filter(&pets).len(), 2);
    }

    #[test]
    fn changing_search_or_any_filter_resets_the_page() {
        let mut query = CatalogQuery::default();
        query.set_page(3);
        query.set_search("rex");
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.set_species(Some(Species::Cat));
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.set_gender(None);
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.set_size(Some(PetSize::Small));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn showcase_takes_the_first_pets_in_catalog_order() {
        let pets = sample(10);

        let shown = featured(&pets);
        assert_eq!(shown.len(), FEATURED_COUNT);
        assert_eq!(shown[0].name, "Pet 1");
        assert_eq!(shown[FEATURED_COUNT - 1].name, "Pet 6");
    }

    #[test]
    fn showcase_of_a_small_catalog_is_the_whole_catalog() {
        let pets = sample(3);
        assert_eq!(featured(&pets).len(), 3);
        assert!(featured(&[]).is_empty());
    }

    // The filter widgets render their selection from these accessors, so
    // the sentinel and a chosen value must both read back faithfully.
    #[test]
    fn filter_accessors_reflect_the_current_selection() {
        let mut query = CatalogQuery::default();
        assert_eq!(query.species(), None);
        assert_eq!(query.gender(), None);
        assert_eq!(query.size(), None);

        query.set_species(Some(Species::Dog));
        query.set_gender(Some(Gender::Female));
        query.set_size(Some(PetSize::Large));

        assert_eq!(query.species(), Some(Species::Dog));
        assert_eq!(query.gender(), Some(Gender::Female));
        assert_eq!(query.size(), Some(PetSize::Large));
    }

    #[test]
    fn ten_pets_split_into_pages_of_eight_and_two() {
        let pets = sample(10);
        let mut query = CatalogQuery::default();
        let filtered = query.filter(&pets);

        assert_eq!(CatalogQuery::total_pages(filtered.len()), 2);

        let first = query.paginate(&filtered);
        assert_eq!(first.len(), 8);
        assert_eq!(first[0].name, "Pet 1");
        assert_eq!(first[7].name, "Pet 8");

        query.set_page(2);
        let second = query.paginate(&filtered);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].name, "Pet 9");
        assert_eq!(second[1].name, "Pet 10");

        query.set_page(3);
        assert!(query.paginate(&filtered).is_empty());
    }

    #[test]
    fn pages_partition_the_filtered_list_exactly() {
        let pets = sample(27);
        let mut query = CatalogQuery::default();
        let filtered = query.filter(&pets);
        let total_pages = CatalogQuery::total_pages(filtered.len());

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            query.set_page(page);
            let slice = query.paginate(&filtered);
            assert!(slice.len() <= PAGE_SIZE);
            seen.extend(slice.iter().map(|pet| pet.id.clone()));
        }

        let expected: Vec<_> = filtered.iter().map(|pet| pet.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn empty_list_yields_no_results_and_no_pages() {
        let pets: Vec<Pet> = Vec::new();
        let mut query = CatalogQuery::default();
        query.set_search("Rex");

        let filtered = query.filter(&pets);
        assert!(filtered.is_empty());
        assert_eq!(CatalogQuery::total_pages(filtered.len()), 0);
        assert!(query.paginate(&filtered).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(CatalogQuery::total_pages(0), 0);
        assert_eq!(CatalogQuery::total_pages(1), 1);
        assert_eq!(CatalogQuery::total_pages(8), 1);
        assert_eq!(CatalogQuery::total_pages(9), 2);
        assert_eq!(CatalogQuery::total_pages(16), 2);
    }
}
