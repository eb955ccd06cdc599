fn main() {
    carematch_lib::run()
}
