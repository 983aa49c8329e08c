fn main() {
    ministore_storefront::start();
}
