
// Inventory tests
mod inventory;

// Evolution tests
mod evolution;
mod matcher;

// Translator tests
mod translator;


// Serializer tests
mod serializers;
