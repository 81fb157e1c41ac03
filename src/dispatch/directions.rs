/// Start location used when the browser sent no coordinates.
pub const CURRENT_LOCATION: &str = "your current location";

pub fn directions_to(start_location: &str) -> String {
    format!(
        "1. Sure, I'd be happy to help you find your way to Haloocom Technologies from **{start_location}**.
2. Here are the step-by-step directions from your starting point to Haloocom Technologies:
3. ➡️ Walk straight from your location to the main entrance.
4. 🚪 Enter the building.
5. ⬅️ Turn left toward the stairs.
6. ⬆️ Climb to the first floor — you'll see \"Brand on Wheelz\" on your right.
7. ⬆️ Continue to the 2nd floor — this is where Haloocom Technologies is located.
8. 🏁 Arrive at the destination.
9. I hope these directions are helpful for you to find your way to Haloocom Technologies."
    )
}
