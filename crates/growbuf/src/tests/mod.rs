mod arbitrary;
mod property_compare;
