coded_enum! {
    /// How a data read resolves the requested index when no event sits
    /// exactly on it.
    pub enum BoundaryType("boundary type") {
        /// Only an event at the exact requested index.
        Exact = 0,
        /// The nearest event inside the requested range.
        Inside = 1,
        /// The nearest event outside the requested range.
        Outside = 2,
        /// The exact event, or a value calculated at the index.
        ExactOrCalculated = 3,
    }
}
